//! Index update pipeline: load, ensure categories, scan, merge, save.
//!
//! # Error Handling Strategy
//!
//! Every step is fatal. A malformed or unreadable index aborts before the
//! directory is scanned, and a file that cannot be described aborts before
//! anything is written, so a failed run never modifies the index file.

use std::collections::{BTreeMap, HashSet};
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use crate::error::{IndexError, Result};
use crate::index_storage::{DEFAULT_INDEX_FILENAME, load_index, save_index};
use crate::indexer::describe::describe_file;
use crate::indexer::scanner::{ScannedFile, classify, scan_directory};
use crate::models::{CategoryMap, Index};
use crate::utils::current_exe_name;

/// Settings for one indexer run
#[derive(Debug, Clone)]
pub struct IndexerOptions {
    /// Directory to scan; the index file lives inside it
    pub directory: PathBuf,
    /// Bare index file name inside `directory`
    pub index_file_name: String,
    pub categories: CategoryMap,
}

impl Default for IndexerOptions {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            index_file_name: DEFAULT_INDEX_FILENAME.to_string(),
            categories: CategoryMap::default(),
        }
    }
}

impl IndexerOptions {
    /// Check that the index file name is a single plain path component
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::InvalidIndexFileName`] for empty names, `.`/`..`,
    /// absolute paths, and names containing a directory separator.
    pub fn validate(&self) -> Result<()> {
        let mut components = Path::new(&self.index_file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if name == self.index_file_name.as_str() => {
                Ok(())
            }
            _ => Err(IndexError::InvalidIndexFileName(self.index_file_name.clone())),
        }
    }

    pub fn index_path(&self) -> PathBuf {
        self.directory.join(&self.index_file_name)
    }

    /// File names that must never be indexed: the index itself and the running executable
    pub fn excluded_names(&self) -> HashSet<String> {
        let mut excluded = HashSet::new();
        if let Some(name) = Path::new(&self.index_file_name).file_name() {
            excluded.insert(name.to_string_lossy().into_owned());
        }
        if let Some(exe) = current_exe_name() {
            excluded.insert(exe);
        }
        excluded
    }
}

/// Outcome of merging scanned files into an index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Newly appended entries per category
    pub added: BTreeMap<String, usize>,
    /// Classified files already present in their category
    pub duplicates: usize,
    /// Files whose extension maps to no category
    pub unclassified: usize,
}

impl MergeReport {
    pub fn total_added(&self) -> usize {
        self.added.values().sum()
    }
}

/// Summary of a completed [`run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub index_path: PathBuf,
    pub merge: MergeReport,
    pub total_entries: usize,
}

/// Insert an empty sequence for every category the map references
///
/// Idempotent; existing categories and their entries are left untouched.
pub fn ensure_categories(index: &mut Index, categories: &CategoryMap) {
    let added = index.ensure_categories(categories);
    if added > 0 {
        debug!(added, "Initialized missing categories");
    }
}

/// Append an entry for every classified file not yet present in its category
///
/// Files are processed in the order given. Duplicate detection is by file name
/// within the target category, and a duplicate is skipped before its metadata
/// is read.
///
/// # Errors
///
/// Returns [`crate::IndexError::FileStat`] if a new file cannot be described.
pub fn merge_files(
    index: &mut Index,
    files: &[ScannedFile],
    categories: &CategoryMap,
) -> Result<MergeReport> {
    let mut report = MergeReport::default();

    for file in files {
        let Some(category) = classify(&file.file_name, categories) else {
            report.unclassified += 1;
            continue;
        };

        if index.contains(category, &file.file_name) {
            debug!(file = %file.file_name, category, "Already indexed");
            report.duplicates += 1;
            continue;
        }

        let entry = describe_file(&file.path)?;
        debug!(file = %file.file_name, category, size = %entry.size, "Adding entry");
        if index.insert_unique(category, entry) {
            *report.added.entry(category.to_string()).or_default() += 1;
        }
    }

    Ok(report)
}

/// Run the full update: load, ensure categories, scan, merge, save
///
/// # Examples
///
/// ```no_run
/// use files_indexer::indexer::{IndexerOptions, run};
///
/// let summary = run(&IndexerOptions::default())?;
/// println!("Added {} entries", summary.merge.total_added());
/// # Ok::<(), files_indexer::IndexError>(())
/// ```
pub fn run(options: &IndexerOptions) -> Result<RunSummary> {
    options.validate()?;
    let index_path = options.index_path();

    let mut index = load_index(&index_path)?;
    ensure_categories(&mut index, &options.categories);

    let files = scan_directory(&options.directory, &options.excluded_names())?;
    debug!(count = files.len(), directory = %options.directory.display(), "Scanned directory");

    let merge = merge_files(&mut index, &files, &options.categories)?;
    save_index(&index_path, &index)?;

    info!(
        added = merge.total_added(),
        duplicates = merge.duplicates,
        unclassified = merge.unclassified,
        total = index.len(),
        "Index updated"
    );

    Ok(RunSummary { index_path, merge, total_entries: index.len() })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::models::Entry;

    fn scanned(dir: &Path, name: &str) -> ScannedFile {
        ScannedFile { file_name: name.to_string(), path: dir.join(name) }
    }

    #[test]
    fn test_merge_classifies_and_counts() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["a.pdf", "b.JPG", "c.txt"] {
            fs::write(temp_dir.path().join(name), b"data").unwrap();
        }
        let files: Vec<ScannedFile> =
            ["a.pdf", "b.JPG", "c.txt"].iter().map(|n| scanned(temp_dir.path(), n)).collect();

        let mut index = Index::new();
        let report = merge_files(&mut index, &files, &CategoryMap::default()).unwrap();

        assert_eq!(report.total_added(), 2);
        assert_eq!(report.added.get("notes"), Some(&1));
        assert_eq!(report.added.get("extras"), Some(&1));
        assert_eq!(report.unclassified, 1);
        assert_eq!(index.entries("extras").unwrap()[0].file_type, "jpg");
    }

    #[test]
    fn test_merge_skips_existing_names_without_reading_them() {
        let temp_dir = TempDir::new().unwrap();
        let mut index = Index::new();
        let existing = Entry {
            name: "gone.pdf".to_string(),
            url: "gone.pdf".to_string(),
            file_type: "pdf".to_string(),
            size: "2.0MB".to_string(),
            date: "01-02-2020".to_string(),
        };
        index.insert_unique("notes", existing.clone());

        // gone.pdf does not exist on disk; a duplicate must not be described
        let files = vec![scanned(temp_dir.path(), "gone.pdf")];
        let report = merge_files(&mut index, &files, &CategoryMap::default()).unwrap();

        assert_eq!(report.duplicates, 1);
        assert_eq!(report.total_added(), 0);
        assert_eq!(index.entries("notes").unwrap(), &[existing]);
    }

    #[test]
    fn test_merge_fails_on_vanished_file() {
        let temp_dir = TempDir::new().unwrap();
        let files = vec![scanned(temp_dir.path(), "vanished.zip")];

        let result = merge_files(&mut Index::new(), &files, &CategoryMap::default());
        assert!(matches!(result, Err(crate::IndexError::FileStat { .. })));
    }

    #[test]
    fn test_ensure_categories_keeps_foreign_categories() {
        let mut index: Index = serde_json::from_str(r#"{"videos": []}"#).unwrap();
        ensure_categories(&mut index, &CategoryMap::default());

        let names: Vec<&str> = index.categories().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["extras", "notes", "videos"]);
    }

    #[test]
    fn test_options_exclude_index_file_name() {
        let options = IndexerOptions {
            index_file_name: "catalog.pdf".to_string(),
            ..IndexerOptions::default()
        };
        let excluded = options.excluded_names();
        assert!(excluded.contains("catalog.pdf"));
        assert!(excluded.contains(&current_exe_name().unwrap()));
    }

    #[test]
    fn test_validate_accepts_bare_names() {
        for name in ["files.json", "catalog.pdf", ".index"] {
            let options =
                IndexerOptions { index_file_name: name.to_string(), ..IndexerOptions::default() };
            assert!(options.validate().is_ok(), "{} should be accepted", name);
        }
    }

    #[test]
    fn test_validate_rejects_paths() {
        let rejected = ["sub/files.json", "/tmp/files.json", "../files.json", "./files.json", "", ".."];
        for name in rejected {
            let options =
                IndexerOptions { index_file_name: name.to_string(), ..IndexerOptions::default() };
            let result = options.validate();
            assert!(
                matches!(result, Err(IndexError::InvalidIndexFileName(_))),
                "{:?} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_run_rejects_nested_index_path_before_touching_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        fs::write(temp_dir.path().join("files.json"), b"{}").unwrap();

        let options = IndexerOptions {
            directory: temp_dir.path().to_path_buf(),
            index_file_name: "sub/files.json".to_string(),
            ..IndexerOptions::default()
        };

        assert!(matches!(run(&options), Err(IndexError::InvalidIndexFileName(_))));
        assert!(!temp_dir.path().join("sub").join("files.json").exists());
        assert_eq!(fs::read_to_string(temp_dir.path().join("files.json")).unwrap(), "{}");
    }

    #[test]
    fn test_run_writes_index() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("slides.pptx"), b"slides").unwrap();

        let options =
            IndexerOptions { directory: temp_dir.path().to_path_buf(), ..IndexerOptions::default() };
        let summary = run(&options).unwrap();

        assert_eq!(summary.index_path, temp_dir.path().join("files.json"));
        assert_eq!(summary.total_entries, 1);
        let saved = load_index(&summary.index_path).unwrap();
        assert_eq!(saved.entries("notes").unwrap()[0].name, "slides.pptx");
    }

    #[test]
    fn test_run_excludes_its_own_index_file() {
        let temp_dir = TempDir::new().unwrap();
        let categories = CategoryMap::from_pairs([("json", "data")]).unwrap();
        let options = IndexerOptions {
            directory: temp_dir.path().to_path_buf(),
            index_file_name: "files.json".to_string(),
            categories,
        };

        run(&options).unwrap();
        let summary = run(&options).unwrap();

        assert_eq!(summary.total_entries, 0);
    }
}
