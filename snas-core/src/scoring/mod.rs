//! Priority scoring for achievements
//!
//! Two formulas live here on purpose. [`ScoringEngine::live_score`] is the
//! request-time formula: additive and unclamped, with per-rule reasoning.
//! [`ScoringEngine::import_score`] is the bulk-load formula: a different
//! keyword-driven sum clamped to `[10, 100]`. The divergence is inherited
//! behavior that callers depend on; do not unify them.

pub mod engine;
pub mod types;
pub mod weights;

pub use engine::ScoringEngine;
pub use types::{
    DisplayWeight, ScoredAchievement, ScoringContext, TargetAudience, UserProfile,
};
pub use weights::ScoringWeights;
