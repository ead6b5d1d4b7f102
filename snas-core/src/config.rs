//! Configuration for the snas engine

use serde::{Deserialize, Serialize};

use crate::scoring::ScoringWeights;

/// Top-level configuration, TOML-loadable. Every field has a default
/// matching the documented engine behavior, so an empty config is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnasConfig {
    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub scoring: ScoringWeights,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub performance: PerformanceConfig,

    #[serde(default)]
    pub import: ImportConfig,
}

impl SnasConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

/// AI backend connection settings. An empty API key disables the AI path
/// entirely; the engine then always uses fallback templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub api_key: String,

    /// Per-request timeout. Kept under the SLA threshold so an AI stall
    /// leaves room for the fallback path.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://api.manus.ai/v1".to_string()
}

fn default_timeout_ms() -> u64 {
    1500
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Content cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

fn default_ttl_secs() -> u64 {
    300
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

/// Advisory SLA settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceConfig {
    #[serde(default = "default_sla_ms")]
    pub sla_ms: u64,
}

fn default_sla_ms() -> u64 {
    2000
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            sla_ms: default_sla_ms(),
        }
    }
}

/// Bulk import settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_batch_size() -> usize {
    50
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
        }
    }
}
