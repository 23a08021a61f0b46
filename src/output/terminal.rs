use crate::formatting::{Marker, Styler};
use crate::report::{CorpusSummary, SourceSummary};
use comfy_table::{presets, CellAlignment, Table};
use std::fmt::Write;

pub const RULE_WIDTH: usize = 80;

const REPORT_TITLE: &str = "CENTRAL BANK COMMUNICATION ANALYTICS - SUMMARY REPORT";

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Render the full human-readable report.
pub fn format_summary_terminal(summary: &CorpusSummary, styler: &Styler) -> String {
    let mut out = String::new();

    writeln!(out, "{}", rule()).ok();
    writeln!(out, "{}", styler.banner(REPORT_TITLE)).ok();
    writeln!(out, "{}", rule()).ok();

    format_overview(&mut out, summary, styler);
    format_sources(&mut out, summary, styler);
    format_insights(&mut out, summary, styler);
    format_terms(&mut out, summary, styler);
    format_top_words(&mut out, summary, styler);

    out
}

fn format_overview(out: &mut String, summary: &CorpusSummary, styler: &Styler) {
    writeln!(out).ok();
    writeln!(out, "{}", styler.section(Marker::Overview, "Dataset Overview:")).ok();
    writeln!(
        out,
        "   {} {}",
        styler.label("Total statements:"),
        summary.total_statements
    )
    .ok();
    writeln!(
        out,
        "   {} {} to {}",
        styler.label("Date range:"),
        summary.first_date,
        summary.last_date
    )
    .ok();
    writeln!(
        out,
        "   {} {}",
        styler.label("Central banks:"),
        summary.source_labels().join(", ")
    )
    .ok();
}

fn format_sources(out: &mut String, summary: &CorpusSummary, styler: &Styler) {
    writeln!(out).ok();
    writeln!(out, "{}", styler.section(Marker::Sources, "Statistics by Bank:")).ok();

    let with_sentiment = summary.sources.iter().any(|s| s.mean_sentiment.is_some());
    let mut table = new_table(styler);

    let mut header = vec![
        "Bank",
        "Statements",
        "Avg words",
        "Avg sentence len",
        "Avg diversity",
    ];
    if with_sentiment {
        header.push("Avg sentiment");
    }
    header.push("Date range");
    table.set_header(header);

    for source in &summary.sources {
        table.add_row(source_row(source, with_sentiment));
    }
    let last_numeric = if with_sentiment { 5 } else { 4 };
    align_numeric_columns(&mut table, 1..=last_numeric);

    for line in table.to_string().lines() {
        writeln!(out, "   {}", line).ok();
    }
}

fn source_row(source: &SourceSummary, with_sentiment: bool) -> Vec<String> {
    let mut row = vec![
        source.source.clone(),
        source.statements.to_string(),
        format!("{:.0}", source.mean_word_count),
        format!("{:.1}", source.mean_sentence_length),
        format!("{:.3}", source.mean_vocab_diversity),
    ];
    if with_sentiment {
        row.push(
            source
                .mean_sentiment
                .map_or_else(|| "-".to_string(), |s| format!("{:.3}", s)),
        );
    }
    row.push(format!("{} to {}", source.first_date, source.last_date));
    row
}

fn format_insights(out: &mut String, summary: &CorpusSummary, styler: &Styler) {
    writeln!(out).ok();
    writeln!(out, "{}", styler.section(Marker::Insights, "Overall Insights:")).ok();

    let lines = [
        (
            "Average statement length:",
            format!("{:.0} words", summary.mean_word_count),
        ),
        (
            "Average sentence length:",
            format!("{:.1} words", summary.mean_sentence_length),
        ),
        (
            "Average word length:",
            format!("{:.2} characters", summary.mean_word_length),
        ),
        (
            "Average vocabulary diversity:",
            format!("{:.3}", summary.mean_vocab_diversity),
        ),
        (
            "Longest statement:",
            format!(
                "{} ({}, {} words)",
                summary.longest.date, summary.longest.source, summary.longest.word_count
            ),
        ),
        (
            "Shortest statement:",
            format!(
                "{} ({}, {} words)",
                summary.shortest.date, summary.shortest.source, summary.shortest.word_count
            ),
        ),
    ];
    for (label, value) in lines {
        writeln!(out, "   {} {}", styler.label(label), value).ok();
    }

    if let Some(sentiment) = &summary.sentiment {
        let mean = format!("{:.3}", sentiment.mean);
        writeln!(
            out,
            "   {} {}",
            styler.label("Average sentiment score:"),
            styler.signed(sentiment.mean, &mean)
        )
        .ok();
        for (label, extreme) in [
            ("Most positive statement:", &sentiment.most_positive),
            ("Most negative statement:", &sentiment.most_negative),
        ] {
            let score = format!("{:.3}", extreme.score);
            writeln!(
                out,
                "   {} {} ({}, {})",
                styler.label(label),
                extreme.statement.date,
                extreme.statement.source,
                styler.signed(extreme.score, &score)
            )
            .ok();
        }
    }
}

fn format_terms(out: &mut String, summary: &CorpusSummary, styler: &Styler) {
    if summary.terms.is_empty() {
        return;
    }

    writeln!(out).ok();
    writeln!(out, "{}", styler.section(Marker::Keywords, "Term Mentions:")).ok();

    let mut table = new_table(styler);
    table.set_header(vec!["Category", "Total", "Per statement", "Per 100 words"]);
    for term in &summary.terms {
        table.add_row(vec![
            capitalize(&term.category),
            term.total_mentions.to_string(),
            format!("{:.1}", term.mean_mentions),
            format!("{:.3}", term.mean_rate_per_100),
        ]);
    }
    align_numeric_columns(&mut table, 1..=3);

    for line in table.to_string().lines() {
        writeln!(out, "   {}", line).ok();
    }
}

fn format_top_words(out: &mut String, summary: &CorpusSummary, styler: &Styler) {
    writeln!(out).ok();
    writeln!(out, "{}", styler.section(Marker::Words, "Most Common Words:")).ok();

    if summary.top_words.is_empty() {
        writeln!(out, "   (none)").ok();
        return;
    }

    for word in &summary.top_words {
        writeln!(out, "   {:15}: {:4}", word.word, word.count).ok();
    }
}

fn new_table(styler: &Styler) -> Table {
    let mut table = Table::new();
    if styler.uses_color() {
        table.load_preset(presets::UTF8_FULL);
    } else {
        table.load_preset(presets::ASCII_FULL);
    }
    table
}

fn align_numeric_columns(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for index in columns {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{StatementRef, TermSummary, WordCount};
    use chrono::NaiveDate;

    fn summary() -> CorpusSummary {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let statement = StatementRef {
            date,
            source: "Fed".to_string(),
            filename: "2023-01-01.txt".to_string(),
            word_count: 7,
        };
        CorpusSummary {
            total_statements: 1,
            first_date: date,
            last_date: date,
            sources: vec![SourceSummary {
                source: "Fed".to_string(),
                statements: 1,
                mean_word_count: 7.0,
                mean_sentence_length: 3.5,
                mean_vocab_diversity: 6.0 / 7.0,
                mean_sentiment: None,
                first_date: date,
                last_date: date,
            }],
            mean_word_count: 7.0,
            mean_sentence_length: 3.5,
            mean_word_length: 33.0 / 7.0,
            mean_vocab_diversity: 6.0 / 7.0,
            longest: statement.clone(),
            shortest: statement,
            terms: vec![TermSummary {
                category: "inflation".to_string(),
                total_mentions: 1,
                mean_mentions: 1.0,
                mean_rate_per_100: 100.0 / 7.0,
            }],
            top_words: vec![WordCount {
                word: "inflation".to_string(),
                count: 1,
            }],
            sentiment: None,
        }
    }

    #[test]
    fn test_plain_report_sections() {
        let report = format_summary_terminal(&summary(), &Styler::plain());

        assert!(report.starts_with(&rule()));
        assert!(report.contains(REPORT_TITLE));
        assert!(report.contains("[STATS] Dataset Overview:"));
        assert!(report.contains("Total statements: 1"));
        assert!(report.contains("Date range: 2023-01-01 to 2023-01-01"));
        assert!(report.contains("Central banks: Fed"));
        assert!(report.contains("Average statement length: 7 words"));
        assert!(report.contains("Average sentence length: 3.5 words"));
        assert!(report.contains("Longest statement: 2023-01-01 (Fed, 7 words)"));
        assert!(report.contains("Inflation"));
        assert!(report.contains("14.286"));
        assert!(report.contains("   inflation      :    1"));
        assert!(!report.contains("sentiment"));
    }

    #[test]
    fn test_sentiment_lines_only_when_scored() {
        use crate::report::{SentimentExtreme, SentimentSummary};

        let mut summary = summary();
        let statement = summary.longest.clone();
        summary.sources[0].mean_sentiment = Some(0.4);
        summary.sentiment = Some(SentimentSummary {
            mean: 0.4,
            most_positive: SentimentExtreme {
                statement: statement.clone(),
                score: 0.4,
            },
            most_negative: SentimentExtreme {
                statement,
                score: 0.4,
            },
        });

        let report = format_summary_terminal(&summary, &Styler::plain());
        assert!(report.contains("Average sentiment score: 0.400"));
        assert!(report.contains("Most positive statement: 2023-01-01 (Fed, 0.400)"));
        assert!(report.contains("Avg sentiment"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("growth"), "Growth");
        assert_eq!(capitalize(""), "");
    }
}
