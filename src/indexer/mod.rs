//! Directory indexing
//!
//! A run moves through a fixed linear sequence:
//!
//! 1. Load the persisted index, or start empty if it does not exist
//! 2. Ensure every known category has a (possibly empty) sequence
//! 3. List the regular files directly inside the scanned directory
//! 4. Classify each file by extension and describe the new ones
//! 5. Append new entries, skipping names already present in the category
//! 6. Rewrite the index file
//!
//! There are no retries. Any error aborts the run before the index is saved.

pub mod builder;
pub mod describe;
pub mod scanner;

pub use builder::{IndexerOptions, MergeReport, RunSummary, ensure_categories, merge_files, run};
pub use describe::describe_file;
pub use scanner::{ScannedFile, classify, extension_of, scan_directory};
