//! Corpus-level aggregation for the summary report.

pub mod summary;
pub mod words;

pub use summary::{
    distinct_sources, longest_statement, mean_of, shortest_statement, statements_for,
    CorpusSummary, SentimentExtreme, SentimentSummary, SourceSummary, StatementRef,
    TermSummary,
};
pub use words::{content_words, top_content_words, WordCount, STOP_WORDS, TOP_WORD_LIMIT};
