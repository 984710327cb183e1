//! Index persistence: load with missing-file fallback, save with atomic writes

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IndexError, Result};
use crate::models::Index;

/// Default index file name, resolved inside the scanned directory
pub const DEFAULT_INDEX_FILENAME: &str = "files.json";

/// Load the index stored at `path`
///
/// Returns an empty index if the file does not exist. Any other failure is an
/// error and leaves the file untouched.
///
/// # Errors
///
/// - [`IndexError::IndexRead`] if the file exists but cannot be read
/// - [`IndexError::IndexParse`] if the content is not a valid index
pub fn load_index(path: &Path) -> Result<Index> {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Index file not found, starting empty");
            return Ok(Index::new());
        }
        Err(source) => return Err(IndexError::IndexRead { path: path.to_path_buf(), source }),
    };

    let index: Index = serde_json::from_slice(&content)
        .map_err(|source| IndexError::IndexParse { path: path.to_path_buf(), source })?;

    debug!(
        path = %path.display(),
        categories = index.category_count(),
        entries = index.len(),
        "Loaded index"
    );
    Ok(index)
}

/// Save the index to `path` as pretty-printed JSON (2-space indentation)
///
/// Writes to a temporary sibling file first and renames it over `path`, so a
/// failed write leaves the previous index intact.
pub fn save_index(path: &Path, index: &Index) -> Result<()> {
    let json = serde_json::to_string_pretty(index).map_err(IndexError::Serialize)?;

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, json)
        .map_err(|source| IndexError::Write { path: temp_path.clone(), source })?;

    if let Err(source) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(IndexError::Write { path: path.to_path_buf(), source });
    }

    debug!(path = %path.display(), entries = index.len(), "Saved index");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
