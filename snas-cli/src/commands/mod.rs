//! CLI command implementations

pub mod content;
pub mod import;
pub mod score;
pub mod stats;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use snas_core::{
    AchievementApi, DataLoader, JsonFileStore, ScoringEngine, SnasConfig, SystemClock,
};

/// Open the file-backed store under `data_dir`.
pub(crate) async fn open_store(data_dir: &Path) -> Result<Arc<JsonFileStore>> {
    let store = JsonFileStore::load(data_dir).await?;
    Ok(Arc::new(store))
}

/// Build a loader over the file-backed store.
pub(crate) async fn make_loader(config: &SnasConfig, data_dir: &Path) -> Result<DataLoader> {
    let store = open_store(data_dir).await?;
    Ok(DataLoader::new(
        store,
        ScoringEngine::new(config.scoring.clone()),
        Arc::new(SystemClock),
    ))
}

/// Build the API facade over the file-backed store.
pub(crate) async fn make_api(config: &SnasConfig, data_dir: &Path) -> Result<AchievementApi> {
    let store = open_store(data_dir).await?;
    Ok(AchievementApi::new(config, store))
}
