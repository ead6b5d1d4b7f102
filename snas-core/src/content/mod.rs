//! Content generation for achievements
//!
//! Two paths produce [`ContentSuggestion`]s: an AI backend reached through
//! [`AiClient`], and deterministic category templates in [`templates`].
//! [`ContentGenerator`] orchestrates cache lookup, path selection, and SLA
//! instrumentation; an AI failure always degrades to templates and never
//! reaches the caller.

pub mod ai;
pub mod generator;
pub mod templates;
pub mod types;

pub use ai::{AiAnalysis, AiCallError, AiClient};
pub use generator::ContentGenerator;
pub use types::{
    ContentPerformance, ContentResponse, ContentSource, ContentSuggestion, ContentType,
};
