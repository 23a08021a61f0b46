//! Validation rules for [`AnalysisConfig`].
//!
//! Every rule is a pure function returning the messages it found, so the
//! loader can report all problems at once.

use super::core::{AnalysisConfig, SourceConfig};
use crate::core::TermCatalog;
use std::collections::HashSet;

// Pure function: Validate source labels are present and unique
fn validate_sources(sources: &[SourceConfig]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for source in sources {
        let label = source.label.trim();
        if label.is_empty() {
            errors.push(format!(
                "source for {} has an empty label",
                source.path.display()
            ));
        } else if !seen.insert(label) {
            errors.push(format!("source label '{}' is defined more than once", label));
        }
    }

    errors
}

// Pure function: Validate every category has a name and non-empty keywords
fn validate_terms(terms: &TermCatalog) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for category in terms.categories() {
        let name = category.name.trim();
        if name.is_empty() {
            errors.push("term category has an empty name".to_string());
            continue;
        }
        if !seen.insert(name) {
            errors.push(format!("term category '{}' is defined more than once", name));
        }
        if category.keywords.is_empty() {
            errors.push(format!("term category '{}' has no keywords", name));
        }
        if category.keywords.iter().any(|k| k.trim().is_empty()) {
            errors.push(format!("term category '{}' contains an empty keyword", name));
        }
    }

    errors
}

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &AnalysisConfig) -> Result<(), Vec<String>> {
    let errors: Vec<String> = validate_sources(&config.sources)
        .into_iter()
        .chain(validate_terms(&config.terms))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
