//! Content generation types

use serde::{Deserialize, Serialize};

/// Kind of content to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    LinkedinPost,
    BadgeDescription,
    ProfessionalSummary,
}

impl ContentType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "linkedin_post" => Some(Self::LinkedinPost),
            "badge_description" => Some(Self::BadgeDescription),
            "professional_summary" => Some(Self::ProfessionalSummary),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LinkedinPost => "linkedin_post",
            Self::BadgeDescription => "badge_description",
            Self::ProfessionalSummary => "professional_summary",
        }
    }
}

/// A single generated content variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSuggestion {
    pub content: String,
    /// Confidence in [0, 1]. Template variants carry fixed confidences;
    /// AI variants carry the backend's reported score.
    pub confidence: f64,
    pub veteran_aligned: bool,
    /// Style tag, e.g. `professional_achievement` or `ai_generated`.
    pub style: String,
}

/// Which path produced the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentSource {
    #[serde(rename = "manus_ai")]
    ManusAi,
    #[serde(rename = "enhanced_fallback")]
    EnhancedFallback,
}

impl ContentSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManusAi => "manus_ai",
            Self::EnhancedFallback => "enhanced_fallback",
        }
    }
}

/// Advisory instrumentation attached to every generation call.
#[derive(Debug, Clone, Serialize)]
pub struct ContentPerformance {
    pub sla_compliant: bool,
    pub cache_hit: bool,
    pub api_source: ContentSource,
}

/// Result of a content-generation call.
#[derive(Debug, Clone, Serialize)]
pub struct ContentResponse {
    pub success: bool,
    pub processing_time_ms: u64,
    pub content_type: ContentType,
    pub suggestions: Vec<ContentSuggestion>,
    pub performance: ContentPerformance,
}
