//! Persistent storage for the file index
//!
//! The index is a single JSON file in the scanned directory (`files.json` by
//! default). It is read once at the start of a run and fully rewritten at the
//! end.

pub mod persistence;

pub use persistence::{DEFAULT_INDEX_FILENAME, load_index, save_index};
