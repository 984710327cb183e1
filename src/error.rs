//! Error types for index loading, scanning and persistence.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Indexer operation result type.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Indexer errors.
///
/// Every variant is fatal for the current run. The only recovered condition,
/// a missing index file, never produces an error.
#[derive(Error, Debug)]
pub enum IndexError {
    /// Index file exists but could not be read
    #[error("Failed to read index file {}: {source}", .path.display())]
    IndexRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Index file exists but is not a valid index
    #[error("Failed to parse index file {}: {source}", .path.display())]
    IndexParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Scan directory could not be listed
    #[error("Failed to read directory {}: {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A listed file disappeared or became unreadable before it was described
    #[error("Failed to read file metadata {}: {source}", .path.display())]
    FileStat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Index could not be serialized
    #[error("Failed to serialize index: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Index could not be persisted
    #[error("Failed to write index file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Index file name is not a bare file name
    #[error("Invalid index file name {0:?}: expected a file name without directories")]
    InvalidIndexFileName(String),

    /// Category mapping file could not be read
    #[error("Failed to read category file {}: {source}", .path.display())]
    CategoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Category mapping file is not a JSON object of strings
    #[error("Failed to parse category file {}: {source}", .path.display())]
    CategoryParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Category mapping contains an unusable pair
    #[error("Invalid category mapping: {0}")]
    InvalidCategory(String),
}

impl IndexError {
    /// Create an invalid category error.
    pub fn invalid_category(msg: impl Into<String>) -> Self {
        Self::InvalidCategory(msg.into())
    }
}
