use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use snas_core::SnasConfig;

mod commands;

#[derive(Parser)]
#[command(name = "snas", about = "Achievement prioritization and content engine")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding the achievement store
    #[arg(long, global = true, default_value = ".")]
    data_dir: PathBuf,

    /// Optional TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Bulk-import achievement records from a JSON file
    Import(commands::import::ImportArgs),
    /// Seed the store with the built-in sample portfolio
    Seed,
    /// Prioritize stored achievements for an audience
    Score(commands::score::ScoreArgs),
    /// Generate content suggestions for one achievement
    Content(commands::content::ContentArgs),
    /// Backfill missing priority scores on stored records
    Repair,
    /// Show store statistics
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Import(args) => commands::import::run(args, &config, &cli.data_dir).await,
        Commands::Seed => commands::import::seed(&config, &cli.data_dir).await,
        Commands::Score(args) => commands::score::run(args, &config, &cli.data_dir).await,
        Commands::Content(args) => commands::content::run(args, &config, &cli.data_dir).await,
        Commands::Repair => commands::import::repair(&config, &cli.data_dir).await,
        Commands::Stats => commands::stats::run(&cli.data_dir).await,
    }
}

fn load_config(path: Option<&Path>) -> Result<SnasConfig> {
    match path {
        Some(p) => {
            let content = std::fs::read_to_string(p)
                .with_context(|| format!("failed to read config {}", p.display()))?;
            SnasConfig::from_toml_str(&content)
                .with_context(|| format!("failed to parse config {}", p.display()))
        }
        None => Ok(SnasConfig::default()),
    }
}
