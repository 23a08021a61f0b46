use crate::config::AnalysisConfig;
use crate::errors::Error;
use crate::formatting::{FormattingConfig, Marker, Styler};
use crate::io::load_corpus;
use crate::metrics::{calculate_metrics, LexiconScorer, SentimentScorer};
use crate::output::{self, OutputFormat};
use crate::render::render_dashboard;
use crate::report::CorpusSummary;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

/// Presentation options that do not belong in the config file
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub format: OutputFormat,
    pub formatting: FormattingConfig,
    pub no_chart: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Terminal,
            formatting: FormattingConfig::default(),
            no_chart: false,
        }
    }
}

/// Load, measure, report and chart the configured corpus.
///
/// Stages run strictly in order and the first failure aborts the run, so a
/// failed chart never gets a completion banner.
pub fn run_analysis(config: &AnalysisConfig, options: &RunOptions) -> Result<()> {
    let styler = Styler::new(options.formatting);
    let terminal = options.format == OutputFormat::Terminal;

    if terminal {
        println!(
            "\n{}",
            styler.section(Marker::Start, "Starting Central Bank Communication Analysis...")
        );
    }

    let corpus = load_corpus(&config.sources).context("Failed to load statements")?;
    if corpus.is_empty() {
        return Err(Error::NoData.into());
    }
    info!("Total: {} statements loaded", corpus.len());

    let scorer = config.sentiment.then(LexiconScorer::new);
    let statements = calculate_metrics(
        corpus,
        &config.terms,
        scorer.as_ref().map(|s| s as &dyn SentimentScorer),
    );
    debug!("Calculated metrics for {} statements", statements.len());

    let summary = CorpusSummary::from_statements(&statements, &config.terms)
        .ok_or(Error::NoData)?;
    let report = output::format_summary(&summary, options.format, &styler)?;
    println!("{}", report);

    if options.no_chart {
        debug!("Chart rendering disabled");
    } else {
        render_dashboard(&statements, &config.terms, &config.output)
            .map_err(Error::from)
            .with_context(|| format!("Failed to write {}", config.output.display()))?;
        info!("Dashboard written to {}", config.output.display());
        if terminal {
            println!(
                "\n{}",
                styler.section(
                    Marker::Chart,
                    &format!("Visualization saved as '{}'", config.output.display())
                )
            );
        }
    }

    if terminal {
        print_completion(&styler, (!options.no_chart).then_some(config.output.as_path()));
    }

    Ok(())
}

fn print_completion(styler: &Styler, chart: Option<&Path>) {
    println!("\n{}", output::rule());
    println!(
        "{} {}",
        styler.marker(Marker::Done),
        styler.success("Analysis complete!")
    );
    println!("{}", output::rule());
    if let Some(chart) = chart {
        println!("   Check '{}' for visualizations", chart.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceConfig;
    use tempfile::TempDir;

    fn plain_options() -> RunOptions {
        RunOptions {
            format: OutputFormat::Terminal,
            formatting: FormattingConfig::plain(),
            no_chart: true,
        }
    }

    #[test]
    fn test_missing_sources_report_no_data() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("chart.png");
        let config = AnalysisConfig::default()
            .with_sources(vec![
                SourceConfig::new("Fed", temp.path().join("fed")),
                SourceConfig::new("RBNZ", temp.path().join("rbnz")),
            ])
            .with_output(&output);

        let options = RunOptions {
            no_chart: false,
            ..plain_options()
        };
        let err = run_analysis(&config, &options).unwrap_err();

        let error = err.downcast_ref::<Error>().expect("typed error");
        assert!(error.is_no_data());
        assert_eq!(err.to_string(), "No data found. Please check data directories.");
        assert!(!output.exists());
    }

    #[test]
    fn test_single_statement_runs_without_chart() {
        let temp = TempDir::new().unwrap();
        let fed = temp.path().join("fed");
        std::fs::create_dir(&fed).unwrap();
        std::fs::write(
            fed.join("2023-01-01.txt"),
            "Inflation risk is high. Growth is slow.",
        )
        .unwrap();
        let config = AnalysisConfig::default()
            .with_sources(vec![SourceConfig::new("Fed", &fed)])
            .with_output(temp.path().join("chart.png"));

        run_analysis(&config, &plain_options()).unwrap();

        assert!(!temp.path().join("chart.png").exists());
    }

    #[test]
    fn test_render_failure_aborts_run() {
        let temp = TempDir::new().unwrap();
        let fed = temp.path().join("fed");
        std::fs::create_dir(&fed).unwrap();
        std::fs::write(fed.join("2023-01-01.txt"), "Growth is strong.").unwrap();
        let config = AnalysisConfig::default()
            .with_sources(vec![SourceConfig::new("Fed", &fed)])
            .with_output(temp.path().join("missing").join("chart.png"));

        let options = RunOptions {
            no_chart: false,
            ..plain_options()
        };
        let err = run_analysis(&config, &options).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::Render(_))
        ));
    }
}
