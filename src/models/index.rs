use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::category::CategoryMap;
use super::entry::Entry;

/// Persisted mapping from category name to its entries
///
/// Categories are kept sorted by name; entries keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Index {
    categories: BTreeMap<String, Vec<Entry>>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an empty sequence for every category in `map` that is missing
    ///
    /// Returns the number of categories added.
    pub fn ensure_categories(&mut self, map: &CategoryMap) -> usize {
        let mut added = 0;
        for category in map.categories() {
            if !self.categories.contains_key(category) {
                self.categories.insert(category.to_string(), Vec::new());
                added += 1;
            }
        }
        added
    }

    /// Whether `category` already holds an entry named `name`
    pub fn contains(&self, category: &str, name: &str) -> bool {
        self.categories.get(category).is_some_and(|entries| entries.iter().any(|e| e.name == name))
    }

    /// Append `entry` to `category` unless an entry with the same name exists
    ///
    /// Returns `true` if the entry was appended.
    pub fn insert_unique(&mut self, category: &str, entry: Entry) -> bool {
        let entries = self.categories.entry(category.to_string()).or_default();
        if entries.iter().any(|e| e.name == entry.name) {
            return false;
        }
        entries.push(entry);
        true
    }

    pub fn entries(&self, category: &str) -> Option<&[Entry]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &[Entry])> {
        self.categories.iter().map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total number of entries across all categories
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
