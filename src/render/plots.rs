//! Dashboard drawing on top of [`plotters`]
//!
//! The dashboard is a single 1500x1000 PNG split into a 2x2 grid:
//!
//! | panel | content |
//! |-------|---------|
//! | top left | sentiment or average sentence length over time |
//! | top right | word count over time |
//! | bottom left | histogram of the top-left metric |
//! | bottom right | mean per-100-words rate per term category |

use super::series::{
    category_axis, histogram, mean_term_rates, padded_range, time_series, x_to_date_label,
    Histogram, PanelMetric, SourceSeries, HISTOGRAM_BINS, MIN_DATE_SPAN, MIN_VALUE_SPAN,
};
use super::{PlotError, Result};
use crate::core::{AnalyzedStatement, TermCatalog};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

pub const DASHBOARD_SIZE: (u32, u32) = (1500, 1000);

const TITLE: &str = "Central Bank Communication Analysis";
const FONT: &str = "sans-serif";

/// Draw the 2x2 dashboard for `statements` and write it to `output`.
///
/// The file is overwritten if it exists. The parent directory must exist.
pub fn render_dashboard(
    statements: &[AnalyzedStatement],
    terms: &TermCatalog,
    output: &Path,
) -> Result<()> {
    if statements.is_empty() {
        return Err(PlotError::InvalidData(
            "Cannot render a dashboard without statements".to_string(),
        ));
    }
    ensure_output_directory(output)?;

    let metric = PanelMetric::select(statements);
    let metric_series = time_series(statements, |s| metric.value(s));
    let word_series = time_series(statements, |s| s.metrics.word_count as f64);
    let bins = histogram(&metric_series, HISTOGRAM_BINS);
    let rates = mean_term_rates(statements, terms);

    debug!(
        "Rendering dashboard to {} ({} sources, metric {:?})",
        output.display(),
        metric_series.len(),
        metric
    );

    let root = BitMapBackend::new(output, DASHBOARD_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;
    let body = root
        .titled(TITLE, (FONT, 32))
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let panels = body.split_evenly((2, 2));
    let [top_left, top_right, bottom_left, bottom_right] = panels.as_slice() else {
        return Err(PlotError::DrawingArea(
            "Expected four dashboard panels".to_string(),
        ));
    };

    draw_time_panel(top_left, metric.title(), metric.axis_label(), &metric_series)?;
    draw_time_panel(top_right, "Word Count Over Time", "Words", &word_series)?;
    draw_histogram_panel(
        bottom_left,
        &format!("{} Distribution", metric.axis_label()),
        &bins,
    )?;
    draw_term_panel(bottom_right, &rates)?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

fn ensure_output_directory(output: &Path) -> Result<()> {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            Err(PlotError::OutputDirectory(parent.to_path_buf()))
        }
        _ => Ok(()),
    }
}

fn series_color(index: usize) -> RGBAColor {
    Palette99::pick(index).to_rgba()
}

fn draw_time_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    y_label: &str,
    series: &[SourceSeries],
) -> Result<()> {
    let points = || series.iter().flat_map(|s| s.points.iter().copied());
    let x_range = padded_range(points().map(|(x, _)| x), MIN_DATE_SPAN);
    let y_range = padded_range(points().map(|(_, y)| y), MIN_VALUE_SPAN);

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, 22))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc(y_label)
        .x_labels(6)
        .x_label_formatter(&|x| x_to_date_label(*x))
        .label_style((FONT, 14))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    for (index, source) in series.iter().enumerate() {
        let color = series_color(index);
        chart
            .draw_series(LineSeries::new(
                source.points.iter().copied(),
                color.stroke_width(2),
            ))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(source.source.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        chart
            .draw_series(
                source
                    .points
                    .iter()
                    .map(|&point| Circle::new(point, 3, color.filled())),
            )
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    draw_legend(&mut chart)
}

fn draw_histogram_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    bins: &Histogram,
) -> Result<()> {
    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, 22))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(bins.start..bins.end(), bins.count_axis())
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .y_desc("Statements")
        .x_label_formatter(&|x| format!("{:.2}", x))
        .label_style((FONT, 14))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let sources = bins.counts.len().max(1) as f64;
    let slot = bins.bin_width / sources;

    for (index, (source, counts)) in bins.counts.iter().enumerate() {
        let color = series_color(index);
        let offset = slot * index as f64;
        let bars = counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(bin, &count)| {
                let (lo, _) = bins.edges(bin);
                let x0 = lo + offset;
                Rectangle::new([(x0, 0), (x0 + slot, count)], color.mix(0.7).filled())
            });

        chart
            .draw_series(bars)
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(source.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));
    }

    draw_legend(&mut chart)
}

fn draw_term_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    rates: &[(String, f64)],
) -> Result<()> {
    const PANEL_TITLE: &str = "Term Mentions per 100 Words";

    if rates.is_empty() {
        area.titled(PANEL_TITLE, (FONT, 22))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
        return Ok(());
    }

    let y_max = rates
        .iter()
        .map(|(_, rate)| *rate)
        .fold(0.0, f64::max)
        .max(MIN_VALUE_SPAN)
        * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption(PANEL_TITLE, (FONT, 22))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(category_axis(rates.len()).into_segmented(), 0.0..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let category_label = |value: &SegmentValue<usize>| match value {
        SegmentValue::CenterOf(index) => rates
            .get(*index)
            .map(|(name, _)| name.clone())
            .unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Mean rate")
        .x_labels(rates.len())
        .x_label_formatter(&category_label)
        .label_style((FONT, 14))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let color = series_color(0);
    chart
        .draw_series(rates.iter().enumerate().map(|(index, (_, rate))| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(index), 0.0),
                    (SegmentValue::Exact(index + 1), *rate),
                ],
                color.mix(0.8).filled(),
            );
            bar.set_margin(0, 0, 12, 12);
            bar
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

fn draw_legend<'a, DB, X, Y>(chart: &mut ChartContext<'a, DB, Cartesian2d<X, Y>>) -> Result<()>
where
    DB: DrawingBackend + 'a,
    X: Ranged,
    Y: Ranged,
{
    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT, 14))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StatementRecord;
    use crate::metrics::compute_text_metrics;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn statement(date: (i32, u32, u32), source: &str, text: &str) -> AnalyzedStatement {
        let date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        AnalyzedStatement {
            record: StatementRecord::new(date, source, text, format!("{}.txt", date)),
            metrics: compute_text_metrics(text, &TermCatalog::default()),
        }
    }

    fn statements() -> Vec<AnalyzedStatement> {
        vec![statement(
            (2023, 1, 1),
            "Fed",
            "Inflation risk is high. Growth is slow.",
        )]
    }

    #[test]
    fn test_dashboard_written_identically_twice() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("chart.png");
        let mut statements = vec![
            statement((2023, 1, 1), "Fed", "Inflation risk is high. Growth is slow."),
            statement((2023, 2, 1), "RBNZ", "Employment is rising. Uncertainty remains."),
            statement((2023, 3, 1), "Fed", "Growth is strong and inflation is easing."),
        ];
        for (s, score) in statements.iter_mut().zip([0.2, -0.4, 0.6]) {
            s.metrics.sentiment = Some(score);
        }

        render_dashboard(&statements, &TermCatalog::default(), &output).unwrap();
        let first = std::fs::read(&output).unwrap();
        render_dashboard(&statements, &TermCatalog::default(), &output).unwrap();
        let second = std::fs::read(&output).unwrap();

        assert!(!first.is_empty());
        assert_eq!(&first[1..4], b"PNG");
        assert!(first == second, "dashboard bytes differ between runs");
    }

    #[test]
    fn test_single_statement_dashboard_renders() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("chart.png");

        render_dashboard(&statements(), &TermCatalog::default(), &output).unwrap();

        assert!(std::fs::metadata(&output).unwrap().len() > 0);
    }

    #[test]
    fn test_empty_statements_are_rejected() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("chart.png");

        let result = render_dashboard(&[], &TermCatalog::default(), &output);

        assert!(matches!(result, Err(PlotError::InvalidData(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_output_directory_fails_before_drawing() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("missing").join("chart.png");

        let result = render_dashboard(&statements(), &TermCatalog::default(), &output);

        match result {
            Err(PlotError::OutputDirectory(dir)) => assert_eq!(dir, temp.path().join("missing")),
            other => panic!("expected OutputDirectory error, got {:?}", other),
        }
        assert!(!output.exists());
    }

    #[test]
    fn test_bare_file_name_needs_no_directory() {
        assert!(ensure_output_directory(Path::new("chart.png")).is_ok());
    }
}
