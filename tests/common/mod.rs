//! Shared testing utilities for CLI tests.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated directory for fixture files.
pub struct TestContext {
    root: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Write a fixture file and return its absolute path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }
}
