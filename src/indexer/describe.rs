use std::fs;
use std::path::Path;

use crate::error::{IndexError, Result};
use crate::indexer::scanner::extension_of;
use crate::models::Entry;
use crate::utils::{format_local_date, format_size_mb};

/// Build the index entry for the regular file at `path`
///
/// `name` and `url` are both the bare file name; `type` is the lowercased
/// extension.
///
/// # Errors
///
/// Returns [`IndexError::FileStat`] if the file's metadata or modification time
/// cannot be read, e.g. when it was removed after the directory was listed.
pub fn describe_file(path: &Path) -> Result<Entry> {
    let stat_error = |source| IndexError::FileStat { path: path.to_path_buf(), source };

    let metadata = fs::metadata(path).map_err(stat_error)?;
    let modified = metadata.modified().map_err(stat_error)?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_type = extension_of(&file_name);

    Ok(Entry {
        url: file_name.clone(),
        name: file_name,
        file_type,
        size: format_size_mb(metadata.len()),
        date: format_local_date(modified),
    })
}
