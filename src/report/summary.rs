//! Aggregate statistics over an analyzed corpus.
//!
//! Everything here is pure: the summary is computed once from the
//! date-sorted statements and then handed to a formatter.

use super::words::{top_content_words, WordCount, TOP_WORD_LIMIT};
use crate::core::{AnalyzedStatement, TermCatalog};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifies one statement in the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementRef {
    pub date: NaiveDate,
    pub source: String,
    pub filename: String,
    pub word_count: usize,
}

impl StatementRef {
    fn from_statement(statement: &AnalyzedStatement) -> Self {
        Self {
            date: statement.record.date,
            source: statement.record.source.clone(),
            filename: statement.record.filename.clone(),
            word_count: statement.metrics.word_count,
        }
    }
}

/// A statement at one end of the sentiment range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentExtreme {
    pub statement: StatementRef,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSummary {
    pub source: String,
    pub statements: usize,
    pub mean_word_count: f64,
    pub mean_sentence_length: f64,
    pub mean_vocab_diversity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_sentiment: Option<f64>,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermSummary {
    pub category: String,
    pub total_mentions: usize,
    pub mean_mentions: f64,
    pub mean_rate_per_100: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub mean: f64,
    pub most_positive: SentimentExtreme,
    pub most_negative: SentimentExtreme,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusSummary {
    pub total_statements: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub sources: Vec<SourceSummary>,
    pub mean_word_count: f64,
    pub mean_sentence_length: f64,
    pub mean_word_length: f64,
    pub mean_vocab_diversity: f64,
    pub longest: StatementRef,
    pub shortest: StatementRef,
    pub terms: Vec<TermSummary>,
    pub top_words: Vec<WordCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentSummary>,
}

impl CorpusSummary {
    /// Summarize a date-sorted, analyzed corpus. Returns `None` when empty.
    pub fn from_statements(
        statements: &[AnalyzedStatement],
        terms: &TermCatalog,
    ) -> Option<Self> {
        let first = statements.first()?;
        let last = statements.last()?;

        Some(Self {
            total_statements: statements.len(),
            first_date: first.date(),
            last_date: last.date(),
            sources: summarize_sources(statements),
            mean_word_count: mean_of(statements, |s| s.metrics.word_count as f64),
            mean_sentence_length: mean_of(statements, |s| s.metrics.avg_sentence_length),
            mean_word_length: mean_of(statements, |s| s.metrics.avg_word_length),
            mean_vocab_diversity: mean_of(statements, |s| s.metrics.vocab_diversity),
            longest: StatementRef::from_statement(longest_statement(statements)?),
            shortest: StatementRef::from_statement(shortest_statement(statements)?),
            terms: summarize_terms(statements, terms),
            top_words: top_content_words(
                statements.iter().map(|s| s.record.text.as_str()),
                TOP_WORD_LIMIT,
            ),
            sentiment: summarize_sentiment(statements),
        })
    }

    pub fn source_labels(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.source.as_str()).collect()
    }

    pub fn source(&self, label: &str) -> Option<&SourceSummary> {
        self.sources.iter().find(|s| s.source == label)
    }

    pub fn term(&self, category: &str) -> Option<&TermSummary> {
        self.terms.iter().find(|t| t.category == category)
    }
}

/// Arithmetic mean of `f` over `statements`, 0 when empty.
pub fn mean_of<'a, I, F>(statements: I, f: F) -> f64
where
    I: IntoIterator<Item = &'a AnalyzedStatement>,
    F: Fn(&AnalyzedStatement) -> f64,
{
    let (sum, count) = statements
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), s| (sum + f(s), count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Distinct source labels in first-appearance order.
pub fn distinct_sources(statements: &[AnalyzedStatement]) -> Vec<&str> {
    let mut labels: Vec<&str> = Vec::new();
    for statement in statements {
        if !labels.contains(&statement.source()) {
            labels.push(statement.source());
        }
    }
    labels
}

/// Statements from one source, preserving corpus order.
pub fn statements_for<'a>(
    statements: &'a [AnalyzedStatement],
    source: &str,
) -> Vec<&'a AnalyzedStatement> {
    statements.iter().filter(|s| s.source() == source).collect()
}

/// Longest statement by word count; the first one wins ties.
pub fn longest_statement(statements: &[AnalyzedStatement]) -> Option<&AnalyzedStatement> {
    statements.iter().fold(None, |best, s| match best {
        Some(b) if b.metrics.word_count >= s.metrics.word_count => Some(b),
        _ => Some(s),
    })
}

/// Shortest statement by word count; the first one wins ties.
pub fn shortest_statement(statements: &[AnalyzedStatement]) -> Option<&AnalyzedStatement> {
    statements.iter().fold(None, |best, s| match best {
        Some(b) if b.metrics.word_count <= s.metrics.word_count => Some(b),
        _ => Some(s),
    })
}

fn summarize_sources(statements: &[AnalyzedStatement]) -> Vec<SourceSummary> {
    distinct_sources(statements)
        .into_iter()
        .filter_map(|label| {
            let group = statements_for(statements, label);
            let first = group.first()?;
            let last = group.last()?;
            Some(SourceSummary {
                source: label.to_string(),
                statements: group.len(),
                mean_word_count: mean_of(group.iter().copied(), |s| {
                    s.metrics.word_count as f64
                }),
                mean_sentence_length: mean_of(group.iter().copied(), |s| {
                    s.metrics.avg_sentence_length
                }),
                mean_vocab_diversity: mean_of(group.iter().copied(), |s| {
                    s.metrics.vocab_diversity
                }),
                mean_sentiment: mean_sentiment(group.iter().copied()),
                first_date: first.date(),
                last_date: last.date(),
            })
        })
        .collect()
}

fn summarize_terms(statements: &[AnalyzedStatement], terms: &TermCatalog) -> Vec<TermSummary> {
    terms
        .names()
        .map(|category| {
            let total_mentions = statements
                .iter()
                .filter_map(|s| s.metrics.term(category))
                .map(|t| t.count)
                .sum();
            TermSummary {
                category: category.to_string(),
                total_mentions,
                mean_mentions: mean_of(statements, |s| {
                    s.metrics.term(category).map_or(0.0, |t| t.count as f64)
                }),
                mean_rate_per_100: mean_of(statements, |s| {
                    s.metrics.term(category).map_or(0.0, |t| t.rate_per_100)
                }),
            }
        })
        .collect()
}

/// Mean sentiment, only when every statement was scored.
fn mean_sentiment<'a, I>(statements: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a AnalyzedStatement>,
{
    let scores: Vec<f64> = statements
        .into_iter()
        .map(|s| s.metrics.sentiment)
        .collect::<Option<_>>()?;
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<f64>() / scores.len() as f64)
}

fn summarize_sentiment(statements: &[AnalyzedStatement]) -> Option<SentimentSummary> {
    let mean = mean_sentiment(statements)?;
    let scored: Vec<(&AnalyzedStatement, f64)> = statements
        .iter()
        .filter_map(|s| s.metrics.sentiment.map(|score| (s, score)))
        .collect();

    let (max_statement, max_score) = scored
        .iter()
        .copied()
        .reduce(|best, next| if next.1 > best.1 { next } else { best })?;
    let (min_statement, min_score) = scored
        .iter()
        .copied()
        .reduce(|best, next| if next.1 < best.1 { next } else { best })?;

    Some(SentimentSummary {
        mean,
        most_positive: SentimentExtreme {
            statement: StatementRef::from_statement(max_statement),
            score: max_score,
        },
        most_negative: SentimentExtreme {
            statement: StatementRef::from_statement(min_statement),
            score: min_score,
        },
    })
}
