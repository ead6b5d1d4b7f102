//! Achievement record storage
//!
//! The engine only ever talks to a store through [`AchievementStore`];
//! the hosting platform's record table is behind the same seam. Two
//! implementations ship here: an in-memory map for tests and embedding,
//! and a JSON-file store for standalone CLI use.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;

use super::Achievement;
use crate::error::StoreError;

/// Storage file name used by [`JsonFileStore`].
const ACHIEVEMENTS_FILE: &str = "achievements.json";

/// Minimal persistence contract the engine needs from a record store.
///
/// `insert` enforces `(name, issuer)` uniqueness so two imports racing on
/// the same record cannot both insert.
#[async_trait]
pub trait AchievementStore: Send + Sync {
    /// All records, sorted by name for deterministic output.
    async fn list(&self) -> Result<Vec<Achievement>, StoreError>;

    async fn get(&self, id: &str) -> Result<Option<Achievement>, StoreError>;

    /// Look up a record by the `(name, issuer)` duplicate key.
    async fn find_by_name_issuer(
        &self,
        name: &str,
        issuer: &str,
    ) -> Result<Option<Achievement>, StoreError>;

    /// Insert a record, assigning an id when empty. Returns the id.
    async fn insert(&self, achievement: Achievement) -> Result<String, StoreError>;

    /// Update an existing record in place.
    async fn update(&self, achievement: &Achievement) -> Result<(), StoreError>;

    /// Delete every record, returning how many were removed.
    async fn delete_all(&self) -> Result<usize, StoreError>;

    async fn count(&self) -> Result<usize, StoreError>;
}

fn sorted_by_name(mut records: Vec<Achievement>) -> Vec<Achievement> {
    records.sort_by(|a, b| a.name.cmp(&b.name));
    records
}

fn prepare_insert(
    records: &HashMap<String, Achievement>,
    mut achievement: Achievement,
) -> Result<Achievement, StoreError> {
    let duplicate = records
        .values()
        .any(|a| a.name == achievement.name && a.issuer == achievement.issuer);
    if duplicate {
        return Err(StoreError::Duplicate {
            name: achievement.name,
            issuer: achievement.issuer,
        });
    }
    if achievement.id.is_empty() {
        achievement.id = uuid::Uuid::new_v4().to_string();
    }
    Ok(achievement)
}

/// In-memory achievement store.
#[derive(Default)]
pub struct MemoryAchievementStore {
    records: RwLock<HashMap<String, Achievement>>,
}

impl MemoryAchievementStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AchievementStore for MemoryAchievementStore {
    async fn list(&self) -> Result<Vec<Achievement>, StoreError> {
        let records = self.records.read().await;
        Ok(sorted_by_name(records.values().cloned().collect()))
    }

    async fn get(&self, id: &str) -> Result<Option<Achievement>, StoreError> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn find_by_name_issuer(
        &self,
        name: &str,
        issuer: &str,
    ) -> Result<Option<Achievement>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .find(|a| a.name == name && a.issuer == issuer)
            .cloned())
    }

    async fn insert(&self, achievement: Achievement) -> Result<String, StoreError> {
        let mut records = self.records.write().await;
        let achievement = prepare_insert(&records, achievement)?;
        let id = achievement.id.clone();
        records.insert(id.clone(), achievement);
        Ok(id)
    }

    async fn update(&self, achievement: &Achievement) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        if !records.contains_key(&achievement.id) {
            return Err(StoreError::NotFound(achievement.id.clone()));
        }
        records.insert(achievement.id.clone(), achievement.clone());
        Ok(())
    }

    async fn delete_all(&self) -> Result<usize, StoreError> {
        let mut records = self.records.write().await;
        let removed = records.len();
        records.clear();
        Ok(removed)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.records.read().await.len())
    }
}

/// File-backed achievement store persisting to `achievements.json`.
pub struct JsonFileStore {
    records: RwLock<HashMap<String, Achievement>>,
    file_path: PathBuf,
}

impl JsonFileStore {
    /// Load records from `data_dir` or start empty.
    pub async fn load(data_dir: &Path) -> Result<Self, StoreError> {
        let file_path = data_dir.join(ACHIEVEMENTS_FILE);

        let records = if file_path.exists() {
            let content = fs::read_to_string(&file_path)
                .await
                .map_err(|e| StoreError::Storage(format!("failed to read achievements: {}", e)))?;
            let list: Vec<Achievement> = serde_json::from_str(&content)
                .map_err(|e| StoreError::Storage(format!("failed to parse achievements: {}", e)))?;
            list.into_iter().map(|a| (a.id.clone(), a)).collect()
        } else {
            HashMap::new()
        };

        Ok(Self {
            records: RwLock::new(records),
            file_path,
        })
    }

    /// Persist the current record set to disk.
    async fn persist(&self) -> Result<(), StoreError> {
        let records = self.records.read().await;
        let list = sorted_by_name(records.values().cloned().collect());

        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Storage(format!("failed to create data dir: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(&list)
            .map_err(|e| StoreError::Storage(format!("failed to serialize achievements: {}", e)))?;

        fs::write(&self.file_path, content)
            .await
            .map_err(|e| StoreError::Storage(format!("failed to write achievements: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl AchievementStore for JsonFileStore {
    async fn list(&self) -> Result<Vec<Achievement>, StoreError> {
        let records = self.records.read().await;
        Ok(sorted_by_name(records.values().cloned().collect()))
    }

    async fn get(&self, id: &str) -> Result<Option<Achievement>, StoreError> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn find_by_name_issuer(
        &self,
        name: &str,
        issuer: &str,
    ) -> Result<Option<Achievement>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .find(|a| a.name == name && a.issuer == issuer)
            .cloned())
    }

    async fn insert(&self, achievement: Achievement) -> Result<String, StoreError> {
        let id = {
            let mut records = self.records.write().await;
            let achievement = prepare_insert(&records, achievement)?;
            let id = achievement.id.clone();
            records.insert(id.clone(), achievement);
            id
        };
        self.persist().await?;
        Ok(id)
    }

    async fn update(&self, achievement: &Achievement) -> Result<(), StoreError> {
        {
            let mut records = self.records.write().await;
            if !records.contains_key(&achievement.id) {
                return Err(StoreError::NotFound(achievement.id.clone()));
            }
            records.insert(achievement.id.clone(), achievement.clone());
        }
        self.persist().await
    }

    async fn delete_all(&self) -> Result<usize, StoreError> {
        let removed = {
            let mut records = self.records.write().await;
            let removed = records.len();
            records.clear();
            removed
        };
        self.persist().await?;
        Ok(removed)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.records.read().await.len())
    }
}
