//! TTL cache for generated content
//!
//! Keyed by `(achievement_id, content_type, audience)` composite strings.
//! An expired entry is a miss: `get` never returns a payload past its
//! `expires_at`, and evicts it eagerly on read.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::clock::Clock;
use crate::content::ContentType;
use crate::scoring::TargetAudience;

struct CacheEntry {
    payload: serde_json::Value,
    expires_at: DateTime<Utc>,
}

/// Key-value cache with a fixed TTL. Payloads are stored serialized, so any
/// serde-able content shape round-trips.
pub struct ContentCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl ContentCache {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// Composite cache key for content suggestions.
    pub fn content_key(
        achievement_id: &str,
        content_type: ContentType,
        audience: TargetAudience,
    ) -> String {
        format!(
            "content_{}_{}_{}",
            achievement_id,
            content_type.as_str(),
            audience.as_str()
        )
    }

    /// Composite cache key for per-badge enhancement content.
    pub fn badge_key(achievement_id: &str, audience: TargetAudience) -> String {
        format!("badge_{}_{}", achievement_id, audience.as_str())
    }

    /// Fetch a payload. Expired or undecodable entries are misses and are
    /// evicted.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let now = self.clock.now();

        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.expires_at > now => {
                    if let Ok(payload) = serde_json::from_value(entry.payload.clone()) {
                        return Some(payload);
                    }
                }
                Some(_) => {}
                None => return None,
            }
        }

        // Entry exists but is expired (or undecodable): evict it
        let mut entries = self.entries.write().await;
        entries.remove(key);
        None
    }

    /// Store a payload under `key`, replacing any previous entry.
    pub async fn set<T: Serialize>(&self, key: impl Into<String>, payload: &T) {
        let Ok(value) = serde_json::to_value(payload) else {
            return;
        };
        let mut entries = self.entries.write().await;
        entries.insert(
            key.into(),
            CacheEntry {
                payload: value,
                expires_at: self.clock.now() + self.ttl,
            },
        );
    }

    /// Number of entries currently held, expired or not.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
