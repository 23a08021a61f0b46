//! Chart rendering for the analysis dashboard

pub mod plots;
pub mod series;

use std::path::PathBuf;
use thiserror::Error;

pub use plots::{render_dashboard, DASHBOARD_SIZE};
pub use series::{histogram, mean_term_rates, time_series, Histogram, PanelMetric, SourceSeries};

/// Errors that can occur while drawing the dashboard
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Output directory does not exist: {}", .0.display())]
    OutputDirectory(PathBuf),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, PlotError>;
