use anyhow::{Context, Result};
use cbcomm::cli::Cli;
use cbcomm::commands::{run_analysis, RunOptions};
use cbcomm::config::{load_config, validate_config};
use cbcomm::errors::Error;
use cbcomm::logging::{level_for_verbosity, setup_logging};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(level_for_verbosity(cli.verbosity));

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    let config = cli.apply_overrides(config);
    validate_config(&config).map_err(|errors| Error::configuration(errors.join("; ")))?;

    let options = RunOptions {
        format: cli.format,
        formatting: cli.formatting_config(),
        no_chart: cli.no_chart,
    };

    run_analysis(&config, &options)
}
