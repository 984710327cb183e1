use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::index_storage::{DEFAULT_INDEX_FILENAME, load_index};
use crate::indexer::{IndexerOptions, run as run_indexer};
use crate::models::CategoryMap;

#[derive(Parser)]
#[command(name = "files-indexer")]
#[command(version = "0.1.0")]
#[command(about = "Index files in a directory by category into a JSON file", long_about = None)]
pub struct Cli {
    /// Directory to scan
    #[arg(long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Name of the index file inside the scanned directory (no directories)
    #[arg(long, global = true, default_value = DEFAULT_INDEX_FILENAME)]
    pub index_file: String,

    /// JSON file mapping extensions to categories, replacing the built-in table
    #[arg(long, global = true)]
    pub categories: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the directory and update the index (default)
    Update,
    /// Show entry counts per category without scanning
    Stats,
}

impl Cli {
    fn options(&self) -> Result<IndexerOptions> {
        let categories = match &self.categories {
            Some(path) => CategoryMap::from_json_file(path)
                .with_context(|| format!("Failed to load categories from {}", path.display()))?,
            None => CategoryMap::default(),
        };

        let options = IndexerOptions {
            directory: self.dir.clone(),
            index_file_name: self.index_file.clone(),
            categories,
        };
        options.validate()?;
        Ok(options)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let options = cli.options()?;

    match &cli.command {
        Some(Commands::Update) | None => {
            update_index(&options)?;
        }
        Some(Commands::Stats) => {
            show_stats(&options)?;
        }
    }

    Ok(())
}

fn update_index(options: &IndexerOptions) -> Result<()> {
    run_indexer(options).context("Index update failed")?;
    println!("{} updated successfully.", options.index_file_name);
    Ok(())
}

fn show_stats(options: &IndexerOptions) -> Result<()> {
    let index_path = options.index_path();
    let mut index = load_index(&index_path)?;
    index.ensure_categories(&options.categories);

    println!("File Index Statistics");
    println!("=====================");
    println!("Index file: {}", index_path.display());
    for (category, entries) in index.categories() {
        println!("  {}: {}", category, entries.len());
    }
    println!("Total entries: {}", index.len());

    Ok(())
}
