use crate::config::{AnalysisConfig, SourceConfig};
use crate::formatting::{ColorMode, EmojiMode, FormattingConfig};
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cbcomm")]
#[command(
    about = "Descriptive text statistics and charts for central bank policy statements",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .cbcomm.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Chart image path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Statement source as LABEL=DIR (repeatable, replaces configured sources)
    #[arg(long = "source", value_name = "LABEL=DIR", value_parser = parse_source)]
    pub sources: Vec<SourceConfig>,

    /// Skip sentiment scoring
    #[arg(long)]
    pub no_sentiment: bool,

    /// Skip chart rendering
    #[arg(long)]
    pub no_chart: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Plain output (ASCII only, no colors, no emoji)
    #[arg(long)]
    pub plain: bool,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Apply command line overrides on top of a loaded configuration
    pub fn apply_overrides(&self, mut config: AnalysisConfig) -> AnalysisConfig {
        if !self.sources.is_empty() {
            config.sources = self.sources.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if self.no_sentiment {
            config.sentiment = false;
        }
        config
    }

    pub fn formatting_config(&self) -> FormattingConfig {
        if self.plain {
            FormattingConfig::new(ColorMode::Never, EmojiMode::Never)
        } else {
            FormattingConfig::from_env()
        }
    }
}

/// Parse a `LABEL=DIR` source argument
pub fn parse_source(value: &str) -> Result<SourceConfig, String> {
    let (label, path) = value
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=DIR, got '{}'", value))?;
    let label = label.trim();
    if label.is_empty() {
        return Err(format!("missing source label in '{}'", value));
    }
    if path.is_empty() {
        return Err(format!("missing directory for source '{}'", label));
    }
    Ok(SourceConfig::new(label, path))
}
