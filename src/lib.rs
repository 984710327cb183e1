//! Files Indexer - Catalog the files in a directory into a JSON index
//!
//! This library scans a single directory (non-recursively), sorts files into
//! categories by extension and records their metadata in a JSON file. It
//! supports:
//!
//! - Loading an existing index, or starting from an empty one
//! - Classifying files through a configurable extension table
//! - Recording name, size (in MB) and local modification date per file
//! - Merging new files while skipping names already indexed
//!
//! # Example
//!
//! ```no_run
//! use files_indexer::{IndexerOptions, run};
//! use std::path::PathBuf;
//!
//! let options = IndexerOptions { directory: PathBuf::from("notes"), ..Default::default() };
//! let summary = run(&options)?;
//! println!("Indexed {} entries", summary.total_entries);
//! # Ok::<(), files_indexer::IndexError>(())
//! ```

pub mod cli;
pub mod error;
pub mod index_storage;
pub mod indexer;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use error::{IndexError, Result};
pub use index_storage::{load_index, save_index};
pub use indexer::{IndexerOptions, RunSummary, run};
pub use models::{CategoryMap, Entry, Index};
