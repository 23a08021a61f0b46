//! Term categories tracked by the metrics pass.
//!
//! A category groups keyword substrings whose combined occurrence rate is
//! reported per statement. The catalog is plain configuration: the counting
//! algorithm in [`crate::metrics`] never hardcodes any category.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

impl TermCategory {
    pub fn new<S: Into<String>>(name: impl Into<String>, keywords: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Total non-overlapping, case-insensitive occurrences of every keyword.
    ///
    /// `lowercase_text` must already be lowercased.
    pub fn count_in(&self, lowercase_text: &str) -> usize {
        self.keywords
            .iter()
            .map(|keyword| keyword.to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .map(|keyword| lowercase_text.matches(keyword.as_str()).count())
            .sum()
    }
}

/// Ordered set of term categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermCatalog {
    categories: Vec<TermCategory>,
}

impl TermCatalog {
    pub fn new(categories: Vec<TermCategory>) -> Self {
        Self { categories }
    }

    pub fn empty() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    pub fn categories(&self) -> &[TermCategory] {
        &self.categories
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The five policy categories tracked when no configuration overrides them.
    pub fn policy_defaults() -> Self {
        Self::new(vec![
            TermCategory::new("inflation", ["inflation"]),
            TermCategory::new("employment", ["employment"]),
            TermCategory::new("growth", ["growth"]),
            TermCategory::new("risk", ["risk"]),
            TermCategory::new("uncertainty", ["uncertainty"]),
        ])
    }
}

impl Default for TermCatalog {
    fn default() -> Self {
        Self::policy_defaults()
    }
}

impl FromIterator<TermCategory> for TermCatalog {
    fn from_iter<I: IntoIterator<Item = TermCategory>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
