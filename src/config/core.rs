use crate::core::TermCatalog;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One labelled statement directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Institution label shown in reports and chart legends
    pub label: String,

    /// Directory holding the dated `.txt` statements
    pub path: PathBuf,
}

impl SourceConfig {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Root configuration structure for cbcomm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Sources in the order they are loaded
    #[serde(default = "default_sources")]
    pub sources: Vec<SourceConfig>,

    /// Term categories tracked per statement
    #[serde(default)]
    pub terms: TermCatalog,

    /// Where the chart image is written
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Score statement sentiment with the built-in lexicon
    #[serde(default = "default_sentiment")]
    pub sentiment: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            terms: TermCatalog::default(),
            output: default_output(),
            sentiment: default_sentiment(),
        }
    }
}

impl AnalysisConfig {
    pub fn with_sources(mut self, sources: Vec<SourceConfig>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_terms(mut self, terms: TermCatalog) -> Self {
        self.terms = terms;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_sentiment(mut self, enabled: bool) -> Self {
        self.sentiment = enabled;
        self
    }
}

pub fn default_sources() -> Vec<SourceConfig> {
    vec![
        SourceConfig::new("Fed", "usa-central-bank/fomc-statements"),
        SourceConfig::new("RBNZ", "nz-central-bank/ocr"),
    ]
}

pub fn default_output() -> PathBuf {
    PathBuf::from("quick_analysis_results.png")
}

pub fn default_sentiment() -> bool {
    true
}
