//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use files_indexer::IndexerOptions;
use tempfile::TempDir;

/// Builder for creating directories to scan
pub struct ScanDirBuilder {
    temp_dir: TempDir,
}

impl ScanDirBuilder {
    /// Create a new builder with an empty directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a file with the given name and size in bytes
    pub fn with_file(self, name: &str, size: usize) -> Self {
        fs::write(self.temp_dir.path().join(name), vec![b'x'; size])
            .expect("Failed to write test file");
        self
    }

    /// Add a file with the given name and modification time
    pub fn with_file_modified(self, name: &str, modified: SystemTime) -> Self {
        let file = File::create(self.temp_dir.path().join(name)).expect("Failed to create file");
        file.set_modified(modified).expect("Failed to set modification time");
        self
    }

    /// Add several small files
    pub fn with_files(self, names: &[&str]) -> Self {
        names.iter().fold(self, |builder, name| builder.with_file(name, 16))
    }

    /// Add a subdirectory
    pub fn with_dir(self, name: &str) -> Self {
        fs::create_dir(self.temp_dir.path().join(name)).expect("Failed to create subdirectory");
        self
    }

    /// Write a pre-existing index file with raw content
    pub fn with_index(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("files.json"), content)
            .expect("Failed to write index file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ScanDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Default options pointed at `dir`
pub fn options_for(dir: &Path) -> IndexerOptions {
    IndexerOptions { directory: dir.to_path_buf(), ..IndexerOptions::default() }
}

pub fn index_path(dir: &Path) -> PathBuf {
    dir.join("files.json")
}

/// Read the saved index as untyped JSON
pub fn read_index_json(dir: &Path) -> serde_json::Value {
    let content = fs::read_to_string(index_path(dir)).expect("Failed to read index file");
    serde_json::from_str(&content).expect("Index file is not valid JSON")
}

/// Sorted entry names of a category in the saved index
pub fn entry_names(dir: &Path, category: &str) -> Vec<String> {
    let json = read_index_json(dir);
    let mut names: Vec<String> = json[category]
        .as_array()
        .expect("Category is not an array")
        .iter()
        .map(|e| e["name"].as_str().expect("Entry name is not a string").to_string())
        .collect();
    names.sort();
    names
}
