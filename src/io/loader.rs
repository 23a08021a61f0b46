//! Corpus loading from dated statement directories.
//!
//! Each source is a directory of `.txt` files whose stem is the statement
//! date, e.g. `2023-01-01.txt`. Sources are loaded independently and merged
//! into a single date-sorted [`Corpus`].

use crate::config::SourceConfig;
use crate::core::{Corpus, StatementRecord};
use crate::errors::{Error, Result};
use chrono::NaiveDate;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

const STATEMENT_EXTENSION: &str = ".txt";
const TXT_MARKER: &str = "-txt";
const UTF8_BOM: char = '\u{feff}';

/// Load every statement in `directory`, labelled with `source`.
///
/// A missing directory yields an empty vector and a warning. A file whose
/// name does not parse as a date fails the whole load.
pub fn load_statements(directory: &Path, source: &str) -> Result<Vec<StatementRecord>> {
    if !directory.is_dir() {
        warn!(
            "Directory not found for source {}: {}",
            source,
            directory.display()
        );
        return Ok(Vec::new());
    }

    let mut statements = Vec::new();
    let walker = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(directory).to_path_buf();
            let io = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
            Error::io(path, io)
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let filename = entry.file_name().to_string_lossy().into_owned();
        let Some(date_key) = date_key_from_filename(&filename) else {
            debug!("Skipping non-statement file: {}", entry.path().display());
            continue;
        };

        let date = parse_statement_date(date_key)
            .ok_or_else(|| Error::date_parse(entry.path(), date_key))?;
        let text = read_statement_text(entry.path())?;

        statements.push(StatementRecord::new(date, source, text, filename));
    }

    if statements.is_empty() {
        warn!(
            "No statements found for source {} in {}",
            source,
            directory.display()
        );
    }

    statements.sort_by_key(|s| s.date);
    Ok(statements)
}

/// Load every configured source and merge them into one date-sorted corpus.
pub fn load_corpus(sources: &[SourceConfig]) -> Result<Corpus> {
    let mut loaded = Vec::with_capacity(sources.len());
    for source in sources {
        let statements = load_statements(&source.path, &source.label)?;
        if !statements.is_empty() {
            info!("Loaded {} statements from {}", statements.len(), source.label);
        }
        loaded.push(statements);
    }

    let corpus = Corpus::merge(loaded);
    debug!("Merged corpus holds {} statements", corpus.len());
    Ok(corpus)
}

/// Date portion of a statement file name, or `None` for non-statement files.
///
/// Strips the `.txt` extension and a trailing `-txt` marker left over from
/// earlier exports (`2023-05-24-txt.txt`).
pub fn date_key_from_filename(filename: &str) -> Option<&str> {
    let stem = filename.strip_suffix(STATEMENT_EXTENSION)?;
    Some(stem.strip_suffix(TXT_MARKER).unwrap_or(stem))
}

/// Parse a statement date formatted as `YYYY-MM-DD`, `YYYY_MM_DD` or `YYYYMMDD`.
pub fn parse_statement_date(value: &str) -> Option<NaiveDate> {
    if !value.bytes().all(|b| b.is_ascii_digit() || b == b'-' || b == b'_') {
        return None;
    }
    let normalized = value.replace('_', "-");
    if let Ok(date) = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
        return Some(date);
    }
    if normalized.len() == 8 && normalized.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveDate::parse_from_str(&normalized, "%Y%m%d").ok();
    }
    None
}

/// Read a statement body as UTF-8, replacing invalid sequences and dropping a BOM.
pub fn read_statement_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.strip_prefix(UTF8_BOM).unwrap_or(&text).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_date_key_from_filename() {
        assert_eq!(date_key_from_filename("2023-01-01.txt"), Some("2023-01-01"));
        assert_eq!(
            date_key_from_filename("2023-05-24-txt.txt"),
            Some("2023-05-24")
        );
        assert_eq!(date_key_from_filename("notes.md"), None);
        assert_eq!(date_key_from_filename("notadate.txt"), Some("notadate"));
    }

    #[test]
    fn test_parse_statement_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 1, 31);
        assert_eq!(parse_statement_date("2023-01-31"), expected);
        assert_eq!(parse_statement_date("2023_01_31"), expected);
        assert_eq!(parse_statement_date("20230131"), expected);
        assert_eq!(parse_statement_date("2023-02-30"), None);
        assert_eq!(parse_statement_date("notadate"), None);
        assert_eq!(parse_statement_date(" 2023-01-31"), None);
        assert_eq!(parse_statement_date("2023-01-31 "), None);
        assert_eq!(parse_statement_date("+2023-01-31"), None);
    }

    #[test]
    fn test_load_statements_missing_directory_is_empty() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");

        let statements = load_statements(&missing, "Fed").unwrap();
        assert!(statements.is_empty());
    }

    #[test]
    fn test_load_statements_sorted_and_labelled() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2023-03-01.txt"), "March.").unwrap();
        fs::write(temp.path().join("2022-12-14.txt"), "December.").unwrap();
        fs::write(temp.path().join("README.md"), "ignored").unwrap();
        fs::create_dir(temp.path().join("2020-01-01.txt")).unwrap();

        let statements = load_statements(temp.path(), "Fed").unwrap();

        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].filename, "2022-12-14.txt");
        assert_eq!(statements[0].text, "December.");
        assert_eq!(statements[1].date, NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());
        assert!(statements.iter().all(|s| s.source == "Fed"));
    }

    #[test]
    fn test_load_statements_rejects_bad_date() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2023-01-01.txt"), "ok").unwrap();
        fs::write(temp.path().join("notadate.txt"), "bad").unwrap();

        let err = load_statements(temp.path(), "Fed").unwrap_err();
        match err {
            Error::DateParse { path, value } => {
                assert!(path.ends_with("notadate.txt"));
                assert_eq!(value, "notadate");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_statement_text_strips_bom_and_replaces_invalid_bytes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("2023-01-01.txt");
        let mut bytes = "\u{feff}Rates".as_bytes().to_vec();
        bytes.push(0xff);
        fs::write(&path, bytes).unwrap();

        let text = read_statement_text(&path).unwrap();
        assert_eq!(text, "Rates\u{fffd}");
    }

    #[test]
    fn test_load_corpus_merges_sources_by_date() {
        let temp = TempDir::new().unwrap();
        let fed = temp.path().join("fed");
        let rbnz = temp.path().join("rbnz");
        fs::create_dir(&fed).unwrap();
        fs::create_dir(&rbnz).unwrap();
        fs::write(fed.join("2023-02-01.txt"), "fed two").unwrap();
        fs::write(fed.join("2023-04-01.txt"), "fed four").unwrap();
        fs::write(rbnz.join("2023-03-01.txt"), "rbnz three").unwrap();

        let sources = vec![
            SourceConfig::new("Fed", fed),
            SourceConfig::new("RBNZ", rbnz),
            SourceConfig::new("ECB", temp.path().join("missing")),
        ];
        let corpus = load_corpus(&sources).unwrap();

        let labels: Vec<_> = corpus.records().iter().map(|r| r.source.as_str()).collect();
        assert_eq!(labels, vec!["Fed", "RBNZ", "Fed"]);
    }
}
