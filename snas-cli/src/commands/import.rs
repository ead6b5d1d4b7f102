//! Import, seed, and repair commands

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use snas_core::{ImportOptions, ImportResult, RawRecord, SnasConfig};

/// Bulk-import arguments
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// JSON file containing an array of achievement records
    pub file: PathBuf,

    /// Delete all existing achievements first
    #[arg(long)]
    pub clear: bool,

    /// Validate and report without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Records per batch
    #[arg(long, default_value_t = 50)]
    pub batch_size: usize,
}

/// Run a bulk import from a JSON file
pub async fn run(args: ImportArgs, config: &SnasConfig, data_dir: &Path) -> Result<()> {
    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let records: Vec<RawRecord> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;

    let loader = super::make_loader(config, data_dir).await?;
    let result = loader
        .populate(
            &records,
            &ImportOptions {
                clear_existing: args.clear,
                validate_only: args.dry_run,
                batch_size: args.batch_size,
            },
        )
        .await?;

    print_result(&result);
    Ok(())
}

/// Seed the store with the built-in sample portfolio
pub async fn seed(config: &SnasConfig, data_dir: &Path) -> Result<()> {
    let loader = super::make_loader(config, data_dir).await?;
    let result = loader.import_defaults().await?;
    print_result(&result);
    Ok(())
}

/// Backfill missing priority scores
pub async fn repair(config: &SnasConfig, data_dir: &Path) -> Result<()> {
    let loader = super::make_loader(config, data_dir).await?;
    let summary = loader.validate_and_update_existing().await?;
    println!(
        "Updated {} record(s), {} error(s)",
        summary.updated_records, summary.error_count
    );
    Ok(())
}

fn print_result(result: &ImportResult) {
    println!("{}", result.message);
    println!(
        "  total: {}  imported: {}  failed: {}  duplicates skipped: {}  ({} ms)",
        result.total_records,
        result.successful_imports,
        result.failed_imports,
        result.duplicates_skipped,
        result.processing_time_ms
    );
    for failure in &result.errors {
        println!("  row {}: {}", failure.row, failure.message);
    }
    if result.validation_only {
        for achievement in &result.processed {
            println!(
                "  would import: {} ({}, score {})",
                achievement.name,
                achievement.issuer,
                achievement.priority_score.unwrap_or_default()
            );
        }
    }
}
