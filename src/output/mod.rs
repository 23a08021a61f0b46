pub mod json;
pub mod terminal;

use crate::errors::Result;
use crate::formatting::Styler;
use crate::report::CorpusSummary;
use clap::ValueEnum;

pub use json::format_summary_json;
pub use terminal::{format_summary_terminal, rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report with tables
    #[default]
    Terminal,
    /// The summary statistics as JSON
    Json,
}

/// Render the summary in the requested format.
pub fn format_summary(
    summary: &CorpusSummary,
    format: OutputFormat,
    styler: &Styler,
) -> Result<String> {
    match format {
        OutputFormat::Terminal => Ok(format_summary_terminal(summary, styler)),
        OutputFormat::Json => format_summary_json(summary),
    }
}
