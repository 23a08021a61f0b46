//! Chart data preparation
//!
//! Everything the dashboard plots is derived here as plain numbers so the
//! drawing code only maps values onto the backend.

use crate::core::{AnalyzedStatement, TermCatalog};
use crate::report::{distinct_sources, mean_of, statements_for};
use chrono::{Datelike, NaiveDate};
use std::ops::Range;

/// Number of histogram bins, shared by every source
pub const HISTOGRAM_BINS: usize = 15;

/// Fraction of the data span added on both sides of an axis
const AXIS_PADDING: f64 = 0.05;

/// Minimum width of a date axis, in days
pub const MIN_DATE_SPAN: f64 = 30.0;

/// Minimum width of a value axis
pub const MIN_VALUE_SPAN: f64 = 1.0;

/// The per-statement metric shown in the first and third panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMetric {
    Sentiment,
    SentenceLength,
}

impl PanelMetric {
    /// Sentiment when every statement was scored, otherwise sentence length
    pub fn select(statements: &[AnalyzedStatement]) -> Self {
        let all_scored = !statements.is_empty()
            && statements.iter().all(|s| s.metrics.sentiment.is_some());
        if all_scored {
            Self::Sentiment
        } else {
            Self::SentenceLength
        }
    }

    pub fn value(self, statement: &AnalyzedStatement) -> f64 {
        match self {
            Self::Sentiment => statement.metrics.sentiment.unwrap_or(0.0),
            Self::SentenceLength => statement.metrics.avg_sentence_length,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Sentiment => "Sentiment Over Time",
            Self::SentenceLength => "Average Sentence Length Over Time",
        }
    }

    pub fn axis_label(self) -> &'static str {
        match self {
            Self::Sentiment => "Sentiment score",
            Self::SentenceLength => "Words per sentence",
        }
    }
}

/// One plotted line: `(day number, value)` points in date order
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSeries {
    pub source: String,
    pub points: Vec<(f64, f64)>,
}

pub fn date_to_x(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

/// Axis label for an x coordinate produced by [`date_to_x`]
pub fn x_to_date_label(x: f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Split statements into one series per source, in first-appearance order.
pub fn time_series<F>(statements: &[AnalyzedStatement], value: F) -> Vec<SourceSeries>
where
    F: Fn(&AnalyzedStatement) -> f64,
{
    distinct_sources(statements)
        .into_iter()
        .map(|source| {
            let points = statements_for(statements, source)
                .into_iter()
                .map(|s| (date_to_x(s.date()), value(s)))
                .collect();
            SourceSeries {
                source: source.to_string(),
                points,
            }
        })
        .collect()
}

/// Axis range covering `values`, widened to at least `min_span` and padded.
pub fn padded_range<I>(values: I, min_span: f64) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (mut lo, mut hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if lo > hi {
        return 0.0..min_span;
    }

    if hi - lo < min_span {
        let mid = (lo + hi) / 2.0;
        lo = mid - min_span / 2.0;
        hi = mid + min_span / 2.0;
    }

    let pad = (hi - lo) * AXIS_PADDING;
    (lo - pad)..(hi + pad)
}

/// Equal-width bins over the combined value range of all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub start: f64,
    pub bin_width: f64,
    pub counts: Vec<(String, Vec<usize>)>,
}

impl Histogram {
    pub fn bins(&self) -> usize {
        self.counts.first().map_or(0, |(_, c)| c.len())
    }

    pub fn end(&self) -> f64 {
        self.start + self.bin_width * self.bins() as f64
    }

    pub fn max_count(&self) -> usize {
        self.counts
            .iter()
            .flat_map(|(_, c)| c.iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// Integer count axis with headroom above the tallest bar
    pub fn count_axis(&self) -> Range<usize> {
        0..self.max_count().max(1) + 1
    }

    /// Lower and upper edge of bin `index`
    pub fn edges(&self, index: usize) -> (f64, f64) {
        let lo = self.start + self.bin_width * index as f64;
        (lo, lo + self.bin_width)
    }
}

/// Bin each series' values into `bins` buckets spanning every series.
///
/// A single distinct value gets a unit-wide range centred on it. The maximum
/// value lands in the last bin.
pub fn histogram(series: &[SourceSeries], bins: usize) -> Histogram {
    let bins = bins.max(1);
    let values = || series.iter().flat_map(|s| s.points.iter().map(|&(_, y)| y));

    let lo = values().fold(f64::INFINITY, f64::min);
    let hi = values().fold(f64::NEG_INFINITY, f64::max);
    let (start, end) = if lo > hi {
        (0.0, 1.0)
    } else if hi - lo < f64::EPSILON {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    };
    let bin_width = (end - start) / bins as f64;

    let counts = series
        .iter()
        .map(|s| {
            let mut counts = vec![0usize; bins];
            for &(_, y) in &s.points {
                let index = (((y - start) / bin_width).floor() as usize).min(bins - 1);
                counts[index] += 1;
            }
            (s.source.clone(), counts)
        })
        .collect();

    Histogram {
        start,
        bin_width,
        counts,
    }
}

/// Segment range holding exactly `categories` bars.
///
/// Segmented coordinates include both ends, so the range stops one short of
/// the category count.
pub fn category_axis(categories: usize) -> Range<usize> {
    0..categories.saturating_sub(1)
}

/// Mean per-100-words rate for each category, in catalog order.
pub fn mean_term_rates(statements: &[AnalyzedStatement], terms: &TermCatalog) -> Vec<(String, f64)> {
    terms
        .names()
        .map(|name| {
            let rate = mean_of(statements, |s| {
                s.metrics.term(name).map_or(0.0, |t| t.rate_per_100)
            });
            (name.to_string(), rate)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StatementRecord;
    use crate::metrics::compute_text_metrics;
    use pretty_assertions::assert_eq;

    fn statement(date: &str, source: &str, text: &str) -> AnalyzedStatement {
        let terms = TermCatalog::default();
        AnalyzedStatement {
            record: StatementRecord::new(
                NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                source,
                text,
                format!("{}.txt", date),
            ),
            metrics: compute_text_metrics(text, &terms),
        }
    }

    fn series(source: &str, ys: &[f64]) -> SourceSeries {
        SourceSeries {
            source: source.to_string(),
            points: ys.iter().enumerate().map(|(i, &y)| (i as f64, y)).collect(),
        }
    }

    #[test]
    fn test_panel_metric_requires_every_score() {
        let mut statements = vec![
            statement("2023-01-01", "Fed", "Growth is strong."),
            statement("2023-02-01", "Fed", "Risk is high."),
        ];
        assert_eq!(PanelMetric::select(&statements), PanelMetric::SentenceLength);

        statements[0].metrics.sentiment = Some(0.5);
        assert_eq!(PanelMetric::select(&statements), PanelMetric::SentenceLength);

        statements[1].metrics.sentiment = Some(-0.5);
        assert_eq!(PanelMetric::select(&statements), PanelMetric::Sentiment);
        assert_eq!(PanelMetric::Sentiment.value(&statements[1]), -0.5);
    }

    #[test]
    fn test_empty_corpus_uses_sentence_length() {
        assert_eq!(PanelMetric::select(&[]), PanelMetric::SentenceLength);
    }

    #[test]
    fn test_time_series_groups_by_source() {
        let statements = vec![
            statement("2023-01-01", "RBNZ", "One two. Three four."),
            statement("2023-01-02", "Fed", "One two three."),
            statement("2023-01-03", "RBNZ", "One."),
        ];

        let series = time_series(&statements, |s| s.metrics.word_count as f64);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].source, "RBNZ");
        assert_eq!(series[0].points.len(), 2);
        assert_eq!(series[0].points[0].1, 4.0);
        assert_eq!(series[1].source, "Fed");
        assert!(series[0].points[0].0 < series[0].points[1].0);
    }

    #[test]
    fn test_date_axis_labels_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(x_to_date_label(date_to_x(date)), "2024-03-15");
        assert_eq!(x_to_date_label(date_to_x(date) - 0.4), "2024-03-15");
        assert_eq!(x_to_date_label(f64::from(i32::MAX) * 4.0), "");
    }

    #[test]
    fn test_padded_range_widens_degenerate_data() {
        let range = padded_range([5.0], MIN_VALUE_SPAN);
        assert!(range.start < 5.0 && range.end > 5.0);
        assert!((range.end - range.start - 1.1).abs() < 1e-9);

        let range = padded_range([0.0, 10.0], MIN_VALUE_SPAN);
        assert!((range.start + 0.5).abs() < 1e-9);
        assert!((range.end - 10.5).abs() < 1e-9);

        assert_eq!(padded_range(Vec::<f64>::new(), 2.0), 0.0..2.0);
    }

    #[test]
    fn test_histogram_shares_bins_across_sources() {
        let hist = histogram(&[series("Fed", &[0.0, 1.0, 2.0]), series("RBNZ", &[3.0])], 3);

        assert_eq!(hist.bins(), 3);
        assert_eq!(hist.start, 0.0);
        assert_eq!(hist.end(), 3.0);
        assert_eq!(hist.counts[0], ("Fed".to_string(), vec![1, 1, 1]));
        assert_eq!(hist.counts[1], ("RBNZ".to_string(), vec![0, 0, 1]));
        assert_eq!(hist.max_count(), 1);
        assert_eq!(hist.edges(1), (1.0, 2.0));
        assert_eq!(hist.count_axis(), 0..2);
    }

    #[test]
    fn test_count_axis_never_collapses() {
        let hist = histogram(&[], 3);
        assert_eq!(hist.max_count(), 0);
        assert_eq!(hist.count_axis(), 0..2);

        let hist = histogram(&[series("Fed", &[1.0, 1.0, 1.0])], 3);
        assert_eq!(hist.count_axis(), 0..4);
    }

    #[test]
    fn test_category_axis_has_one_slot_per_category() {
        assert_eq!(category_axis(5), 0..4);
        assert_eq!(category_axis(1), 0..0);
        assert_eq!(category_axis(0), 0..0);
    }

    #[test]
    fn test_histogram_single_value() {
        let hist = histogram(&[series("Fed", &[4.0, 4.0])], HISTOGRAM_BINS);

        assert_eq!(hist.bins(), HISTOGRAM_BINS);
        assert_eq!(hist.start, 3.5);
        assert_eq!(hist.counts[0].1.iter().sum::<usize>(), 2);
        assert_eq!(hist.max_count(), 2);
    }

    #[test]
    fn test_mean_term_rates_follow_catalog_order() {
        let statements = vec![
            statement("2023-01-01", "Fed", "Inflation risk is high. Growth is slow."),
            statement("2023-01-02", "Fed", "Nothing here at all today folks."),
        ];

        let rates = mean_term_rates(&statements, &TermCatalog::default());
        let names: Vec<_> = rates.iter().map(|(n, _)| n.as_str()).collect();

        assert_eq!(
            names,
            vec!["inflation", "employment", "growth", "risk", "uncertainty"]
        );
        assert!((rates[0].1 - 50.0 / 7.0).abs() < 1e-9);
        assert_eq!(rates[1].1, 0.0);
    }

    #[test]
    fn test_missing_term_counts_as_zero() {
        let mut s = statement("2023-01-01", "Fed", "Inflation.");
        s.metrics = compute_text_metrics("Inflation.", &TermCatalog::empty());
        let rates = mean_term_rates(&[s], &TermCatalog::default());
        assert!(rates.iter().all(|(_, r)| *r == 0.0));
    }
}
