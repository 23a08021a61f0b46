use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One policy statement as read from disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRecord {
    pub date: NaiveDate,
    pub source: String,
    pub text: String,
    pub filename: String,
}

impl StatementRecord {
    pub fn new(
        date: NaiveDate,
        source: impl Into<String>,
        text: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            date,
            source: source.into(),
            text: text.into(),
            filename: filename.into(),
        }
    }
}

/// Raw count and length-normalized rate for one term category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermCount {
    pub category: String,
    pub count: usize,
    pub rate_per_100: f64,
}

/// Metrics derived from a single statement's text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementMetrics {
    pub word_count: usize,
    pub char_count: usize,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
    pub vocab_diversity: f64,
    pub terms: Vec<TermCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<f64>,
}

impl StatementMetrics {
    pub fn term(&self, category: &str) -> Option<&TermCount> {
        self.terms.iter().find(|t| t.category == category)
    }
}

/// A statement paired with the metrics computed from it.
///
/// The record is carried through untouched; the metrics pass only adds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedStatement {
    pub record: StatementRecord,
    pub metrics: StatementMetrics,
}

impl AnalyzedStatement {
    pub fn date(&self) -> NaiveDate {
        self.record.date
    }

    pub fn source(&self) -> &str {
        &self.record.source
    }
}

/// The merged statement collection, always sorted by date ascending.
///
/// Records sharing a date keep the order in which they were merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    records: Vec<StatementRecord>,
}

impl Corpus {
    pub fn new(mut records: Vec<StatementRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records }
    }

    /// Concatenate independently loaded sources and re-sort by date.
    pub fn merge<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = Vec<StatementRecord>>,
    {
        Self::new(sources.into_iter().flatten().collect())
    }

    pub fn records(&self) -> &[StatementRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<StatementRecord> {
        self.records
    }
}
