// Test utility module for cbcomm integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const FED_STATEMENT: &str = "Inflation risk is high. Growth is slow.";

/// A temporary corpus root holding one directory per source
pub struct CorpusFixture {
    pub root: TempDir,
}

impl CorpusFixture {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Create an empty source directory and return its path
    pub fn source_dir(&self, name: &str) -> PathBuf {
        let dir = self.root.path().join(name);
        fs::create_dir_all(&dir).expect("Failed to create source dir");
        dir
    }

    /// Write `text` as `file_name` inside the source directory `name`
    pub fn statement(&self, name: &str, file_name: &str, text: &str) -> PathBuf {
        let path = self.source_dir(name).join(file_name);
        fs::write(&path, text).expect("Failed to write statement");
        path
    }

    /// Path under the root that is never created
    pub fn missing(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }
}
