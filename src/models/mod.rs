//! Data models for the file index.
//!
//! - [`CategoryMap`] - extension to category table used for classification
//! - [`Entry`] - metadata recorded for one file
//! - [`Index`] - persisted mapping from category to entries

pub mod category;
pub mod entry;
pub mod index;

pub use category::CategoryMap;
pub use entry::Entry;
pub use index::Index;
