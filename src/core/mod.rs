pub mod terms;
pub mod types;

pub use terms::{TermCatalog, TermCategory};
pub use types::{AnalyzedStatement, Corpus, StatementMetrics, StatementRecord, TermCount};
