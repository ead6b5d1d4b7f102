//! snas-core: achievement prioritization and content generation engine
//!
//! This crate provides the foundational components for snas:
//!
//! - **Achievement model** - [`Achievement`] records and the [`AchievementStore`]
//!   persistence seam with in-memory and JSON-file implementations
//! - **Scoring engine** - [`ScoringEngine`] with the audience-aware live
//!   formula and the clamped import-time formula
//! - **Content generation** - [`ContentGenerator`] with an AI-backed path
//!   ([`AiClient`]) and deterministic template fallbacks
//! - **Caching** - [`ContentCache`] TTL store for generated content
//! - **Import pipeline** - [`DataLoader`] for validated, batched bulk loads
//! - **Metrics** - [`PerformanceTracker`] for SLA and cache-hit accounting
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use snas_core::{AchievementApi, MemoryAchievementStore, ScoringContext, SnasConfig, UserProfile};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(MemoryAchievementStore::new());
//!     let api = AchievementApi::new(&SnasConfig::default(), store);
//!
//!     let profile = UserProfile::new("Jordan Example");
//!     let response = api
//!         .prioritize_stored(&profile, &ScoringContext::default())
//!         .await?;
//!     println!("{} badges prioritized", response.metadata.total_badges);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                   AchievementApi                      │
//! │  ┌──────────────┐  ┌──────────────┐  ┌────────────┐  │
//! │  │ ScoringEngine│  │  Content     │  │ DataLoader │  │
//! │  │ live/import  │  │  Generator   │  │  (batch)   │  │
//! │  └──────────────┘  └──────┬───────┘  └─────┬──────┘  │
//! │                          ┌┴────────┐       │         │
//! │                          │AiClient │       │         │
//! │                          │+fallback│       │         │
//! │                          └─────────┘       │         │
//! └───────────┬──────────────────┬─────────────┴─────────┘
//!             ▼                  ▼
//!      ┌────────────┐    ┌──────────────┐
//!      │ContentCache│    │Achievement   │
//!      │  (TTL)     │    │Store (trait) │
//!      └────────────┘    └──────────────┘
//! ```

pub mod achievement;
pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod content;
pub mod error;
pub mod import;
pub mod metrics;
pub mod scoring;

// Re-export key types for convenience
pub use achievement::{
    Achievement, AchievementStore, AchievementType, JsonFileStore, MemoryAchievementStore,
    PLATFORM_ISSUER, normalize_issuer,
};
pub use api::{
    AchievementApi, BadgeContent, ErrorResponse, PrioritizeMetadata, PrioritizeResponse,
    PrioritizedBadge,
};
pub use cache::ContentCache;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{AiConfig, CacheConfig, ImportConfig, PerformanceConfig, SnasConfig};
pub use content::{
    AiCallError, AiClient, ContentGenerator, ContentPerformance, ContentResponse, ContentSource,
    ContentSuggestion, ContentType,
};
pub use error::{ImportError, Result, SnasError, StoreError};
pub use import::{
    DataLoader, ImportOptions, ImportResult, RawRecord, RecordFailure, RepairSummary,
    UpsertOutcome, sample_records,
};
pub use metrics::{PerformanceMetrics, PerformanceTracker};
pub use scoring::{
    DisplayWeight, ScoredAchievement, ScoringContext, ScoringEngine, ScoringWeights,
    TargetAudience, UserProfile,
};
