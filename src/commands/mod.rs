//! Command implementations for the cbcomm binary.
//!
//! - **analyze**: load the configured sources, print the summary report and
//!   write the chart dashboard

pub mod analyze;

pub use analyze::{run_analysis, RunOptions};
