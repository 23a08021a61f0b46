// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod logging;
pub mod metrics;
pub mod output;
pub mod render;
pub mod report;

// Re-export commonly used types
pub use crate::core::{
    AnalyzedStatement, Corpus, StatementMetrics, StatementRecord, TermCatalog, TermCategory,
    TermCount,
};

pub use crate::config::{load_config, AnalysisConfig, SourceConfig};

pub use crate::errors::{Error, Result};

pub use crate::io::{load_corpus, load_statements};

pub use crate::metrics::{calculate_metrics, LexiconScorer, SentimentScorer};

pub use crate::report::CorpusSummary;

pub use crate::render::{render_dashboard, PlotError};

pub use crate::commands::{run_analysis, RunOptions};
