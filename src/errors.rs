//! Shared error types for the analysis pipeline
//!
//! Only fatal conditions live here. A configured source directory that does
//! not exist is not an error: the loader logs a warning and the source
//! contributes no statements.

use crate::render::PlotError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for cbcomm operations
#[derive(Debug, Error)]
pub enum Error {
    /// Every configured source was missing or empty
    #[error("No data found. Please check data directories.")]
    NoData,

    /// A statement file name does not carry a parseable date
    #[error("Cannot parse date from file name '{}' (date portion: '{value}')", path.display())]
    DateParse { path: PathBuf, value: String },

    /// File system related errors
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Chart rendering errors
    #[error("Failed to render charts: {0}")]
    Render(#[from] PlotError),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a date parse error for the file at `path`
    pub fn date_parse(path: impl AsRef<Path>, value: impl Into<String>) -> Self {
        Self::DateParse {
            path: path.as_ref().to_path_buf(),
            value: value.into(),
        }
    }

    /// Create an I/O error with path context
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether this error means the corpus came back empty
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }
}

/// Result type alias for cbcomm operations
pub type Result<T> = std::result::Result<T, Error>;
