//! Metrics calculation module
//!
//! Derives per-statement metrics (counts, ratios, term frequencies and an
//! optional sentiment score) from a loaded corpus.

pub mod sentiment;
pub mod text;

pub use sentiment::{LexiconScorer, SentimentScorer};
pub use text::{
    analyze_statement, calculate_metrics, compute_text_metrics, count_sentences, count_terms,
    rate_per_100, vocab_diversity,
};
