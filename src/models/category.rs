use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::error::{IndexError, Result};

/// Built-in extension table: (extension, category)
const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("pdf", "notes"),
    ("doc", "notes"),
    ("docx", "notes"),
    ("ppt", "notes"),
    ("pptx", "notes"),
    ("zip", "extras"),
    ("rar", "extras"),
    ("mp4", "extras"),
    ("jpg", "extras"),
];

/// Immutable mapping from lowercase file extension to category name
///
/// Keys are normalized on construction (trimmed, leading `.` stripped,
/// lowercased), so lookups only need to lowercase the probed extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMap {
    by_extension: BTreeMap<String, String>,
}

impl CategoryMap {
    /// Build a map from `(extension, category)` pairs
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::InvalidCategory`] if an extension or category is empty,
    /// or if two extensions differing only in case map to different categories.
    pub fn from_pairs<I, E, C>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (E, C)>,
        E: AsRef<str>,
        C: AsRef<str>,
    {
        let mut by_extension = BTreeMap::new();

        for (extension, category) in pairs {
            let raw = extension.as_ref();
            let key = normalize_extension(raw);
            let category = category.as_ref().trim();

            if key.is_empty() {
                return Err(IndexError::invalid_category(format!(
                    "empty extension {:?} (category {:?})",
                    raw, category
                )));
            }
            if category.is_empty() {
                return Err(IndexError::invalid_category(format!(
                    "extension {:?} maps to an empty category",
                    raw
                )));
            }

            if let Some(existing) = by_extension.get(&key)
                && existing != category
            {
                return Err(IndexError::invalid_category(format!(
                    "extension {:?} maps to both {:?} and {:?}",
                    key, existing, category
                )));
            }
            by_extension.insert(key, category.to_string());
        }

        Ok(Self { by_extension })
    }

    /// Load a map from a JSON object of `"extension": "category"` pairs
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|source| IndexError::CategoryRead { path: path.to_path_buf(), source })?;
        let pairs: BTreeMap<String, String> = serde_json::from_str(&content)
            .map_err(|source| IndexError::CategoryParse { path: path.to_path_buf(), source })?;
        Self::from_pairs(pairs)
    }

    /// Category for an extension, compared case-insensitively
    pub fn get(&self, extension: &str) -> Option<&str> {
        if extension.is_empty() {
            return None;
        }
        self.by_extension.get(&extension.to_lowercase()).map(String::as_str)
    }

    /// Distinct category names, sorted
    pub fn categories(&self) -> BTreeSet<&str> {
        self.by_extension.values().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_extension.iter().map(|(ext, cat)| (ext.as_str(), cat.as_str()))
    }

    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }
}

impl Default for CategoryMap {
    fn default() -> Self {
        let by_extension = DEFAULT_CATEGORIES
            .iter()
            .map(|(ext, cat)| (ext.to_string(), cat.to_string()))
            .collect();
        Self { by_extension }
    }
}

fn normalize_extension(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_prefix('.').unwrap_or(trimmed).to_lowercase()
}
