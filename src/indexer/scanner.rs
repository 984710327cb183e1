use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IndexError, Result};
use crate::models::CategoryMap;

/// A regular file found by [`scan_directory`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub file_name: String,
    pub path: PathBuf,
}

/// Lowercased extension of `file_name`: the text after the last `.`
///
/// A name without any `.` has an empty extension.
pub fn extension_of(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, extension)) => extension.to_lowercase(),
        None => String::new(),
    }
}

/// Category for `file_name` according to its extension, if any
///
/// # Examples
///
/// ```
/// use files_indexer::indexer::classify;
/// use files_indexer::models::CategoryMap;
///
/// let map = CategoryMap::default();
/// assert_eq!(classify("Lecture1.PDF", &map), Some("notes"));
/// assert_eq!(classify("photo.png", &map), None);
/// assert_eq!(classify("README", &map), None);
/// ```
pub fn classify<'a>(file_name: &str, categories: &'a CategoryMap) -> Option<&'a str> {
    categories.get(&extension_of(file_name))
}

/// List the regular files directly inside `dir`, in directory listing order
///
/// Entries named in `excluded` are skipped, as is anything that is not a
/// regular file once symlinks are followed. Subdirectories are not descended
/// into.
///
/// # Errors
///
/// Returns [`IndexError::DirectoryRead`] if the directory or one of its entries
/// cannot be read.
pub fn scan_directory(dir: &Path, excluded: &HashSet<String>) -> Result<Vec<ScannedFile>> {
    let entries = fs::read_dir(dir)
        .map_err(|source| IndexError::DirectoryRead { path: dir.to_path_buf(), source })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|source| IndexError::DirectoryRead { path: dir.to_path_buf(), source })?;
        let file_name = entry.file_name().to_string_lossy().into_owned();

        if excluded.contains(&file_name) {
            debug!(file = %file_name, "Skipping excluded file");
            continue;
        }

        let path = entry.path();
        if !path.is_file() {
            debug!(file = %file_name, "Skipping non-regular file");
            continue;
        }

        files.push(ScannedFile { file_name, path });
    }

    Ok(files)
}
