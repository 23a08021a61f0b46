//! Per-statement text metrics.
//!
//! Counting follows a few fixed rules:
//!
//! - **Words**: whitespace-delimited tokens
//! - **Characters**: Unicode scalar values of the raw text
//! - **Sentences**: occurrences of `.`, `!` and `?`
//! - **Vocabulary diversity**: distinct lowercase tokens divided by tokens
//!   (type-token ratio), 0 for an empty statement
//!
//! Averages never divide by zero: a zero denominator is treated as 1.

use super::sentiment::SentimentScorer;
use crate::core::{
    AnalyzedStatement, Corpus, StatementMetrics, StatementRecord, TermCatalog, TermCount,
};
use std::collections::HashSet;

pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Compute metrics for every statement in the corpus, preserving its order.
pub fn calculate_metrics(
    corpus: Corpus,
    terms: &TermCatalog,
    sentiment: Option<&dyn SentimentScorer>,
) -> Vec<AnalyzedStatement> {
    corpus
        .into_records()
        .into_iter()
        .map(|record| analyze_statement(record, terms, sentiment))
        .collect()
}

/// Attach metrics to a single record without touching its fields.
pub fn analyze_statement(
    record: StatementRecord,
    terms: &TermCatalog,
    sentiment: Option<&dyn SentimentScorer>,
) -> AnalyzedStatement {
    let mut metrics = compute_text_metrics(&record.text, terms);
    metrics.sentiment = sentiment.map(|scorer| scorer.score(&record.text));
    AnalyzedStatement { record, metrics }
}

/// Pure function: compute every objective metric for `text`.
pub fn compute_text_metrics(text: &str, terms: &TermCatalog) -> StatementMetrics {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let word_count = tokens.len();
    let sentence_count = count_sentences(text);
    let token_chars: usize = tokens.iter().map(|t| t.chars().count()).sum();

    StatementMetrics {
        word_count,
        char_count: text.chars().count(),
        sentence_count,
        avg_sentence_length: safe_ratio(word_count, sentence_count),
        avg_word_length: safe_ratio(token_chars, word_count),
        vocab_diversity: vocab_diversity(&tokens),
        terms: count_terms(text, word_count, terms),
        sentiment: None,
    }
}

pub fn count_sentences(text: &str) -> usize {
    text.chars()
        .filter(|c| SENTENCE_TERMINATORS.contains(c))
        .count()
}

/// Type-token ratio over lowercase tokens.
pub fn vocab_diversity(tokens: &[&str]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let distinct: HashSet<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
    distinct.len() as f64 / tokens.len() as f64
}

/// Raw count and per-100-words rate for each category, in catalog order.
pub fn count_terms(text: &str, word_count: usize, terms: &TermCatalog) -> Vec<TermCount> {
    let lowered = text.to_lowercase();
    terms
        .categories()
        .iter()
        .map(|category| {
            let count = category.count_in(&lowered);
            TermCount {
                category: category.name.clone(),
                count,
                rate_per_100: rate_per_100(count, word_count),
            }
        })
        .collect()
}

pub fn rate_per_100(count: usize, word_count: usize) -> f64 {
    if word_count == 0 {
        0.0
    } else {
        100.0 * count as f64 / word_count as f64
    }
}

fn safe_ratio(numerator: usize, denominator: usize) -> f64 {
    numerator as f64 / denominator.max(1) as f64
}
