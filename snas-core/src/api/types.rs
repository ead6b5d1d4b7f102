//! API facade response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content::ContentSource;
use crate::error::SnasError;
use crate::scoring::ScoredAchievement;

/// Per-badge content attached during prioritization. Deserializable so it
/// can round-trip through the content cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeContent {
    pub linkedin_post: String,
    pub professional_summary: String,
    pub confidence: f64,
    pub source: ContentSource,
}

/// A scored badge with its generated content.
#[derive(Debug, Clone, Serialize)]
pub struct PrioritizedBadge {
    #[serde(flatten)]
    pub scored: ScoredAchievement,
    pub content: BadgeContent,
    pub cache_hit: bool,
}

/// Metadata describing a prioritization run.
#[derive(Debug, Clone, Serialize)]
pub struct PrioritizeMetadata {
    pub total_badges: usize,
    pub prioritization_algorithm: &'static str,
    pub sla_compliant: bool,
}

/// Successful prioritization response.
#[derive(Debug, Clone, Serialize)]
pub struct PrioritizeResponse {
    pub success: bool,
    pub processing_time_ms: u64,
    pub badges: Vec<PrioritizedBadge>,
    pub metadata: PrioritizeMetadata,
}

/// Structured error envelope returned across the boundary. Callers never
/// see a raw error chain or a panic.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub status_code: u16,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(err: &SnasError, timestamp: DateTime<Utc>) -> Self {
        Self {
            success: false,
            error: err.to_string(),
            status_code: err.status_code(),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn error_response_carries_status_and_message() {
        let err = SnasError::InvalidInput("missing user profile".into());
        let ts = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let response = ErrorResponse::new(&err, ts);

        assert!(!response.success);
        assert_eq!(response.status_code, 400);
        assert!(response.error.contains("missing user profile"));
        assert_eq!(response.timestamp, ts);
    }

    #[test]
    fn error_response_serializes_with_success_false() {
        let err = SnasError::RecordNotFound("abc".into());
        let ts = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let json = serde_json::to_string(&ErrorResponse::new(&err, ts)).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"status_code\":404"));
    }
}
