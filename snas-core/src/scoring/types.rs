//! Scoring context and result types

use serde::{Deserialize, Serialize};

use crate::achievement::Achievement;

/// Audience a scoring or content-generation call is targeting.
///
/// Unrecognized audience strings deserialize to [`TargetAudience::General`],
/// which applies no boost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetAudience {
    ItRecruiters,
    VeteranCommunity,
    ServicenowProfessionals,
    #[serde(other)]
    General,
}

impl TargetAudience {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "it_recruiters" => Self::ItRecruiters,
            "veteran_community" => Self::VeteranCommunity,
            "servicenow_professionals" => Self::ServicenowProfessionals,
            _ => Self::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ItRecruiters => "it_recruiters",
            Self::VeteranCommunity => "veteran_community",
            Self::ServicenowProfessionals => "servicenow_professionals",
            Self::General => "general",
        }
    }
}

/// Caller-supplied targeting options.
///
/// A tagged struct instead of a free-form map: unknown keys are a
/// deserialization error, not a silent no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringContext {
    #[serde(default)]
    pub target_audience: Option<TargetAudience>,
    /// When false, reasoning strings are omitted from scored results.
    #[serde(default = "default_true")]
    pub include_reasoning: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ScoringContext {
    fn default() -> Self {
        Self {
            target_audience: None,
            include_reasoning: true,
        }
    }
}

impl ScoringContext {
    /// Context targeting a specific audience.
    pub fn for_audience(audience: TargetAudience) -> Self {
        Self {
            target_audience: Some(audience),
            include_reasoning: true,
        }
    }
}

/// Minimal profile of the user whose achievements are being scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub display_name: String,
    #[serde(default)]
    pub headline: String,
}

impl UserProfile {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            headline: String::new(),
        }
    }

    /// A profile is usable when it names someone.
    pub fn is_valid(&self) -> bool {
        !self.display_name.trim().is_empty()
    }
}

/// UI display bucket derived from a priority score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayWeight {
    High,
    Medium,
    Low,
}

impl DisplayWeight {
    pub fn from_score(score: i64) -> Self {
        if score >= 100 {
            Self::High
        } else if score >= 75 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// An achievement with its computed live score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredAchievement {
    pub achievement: Achievement,
    /// Unclamped additive score.
    pub priority_score: i64,
    /// One entry per triggered rule, in application order.
    pub reasoning: Vec<String>,
    pub display_weight: DisplayWeight,
    /// Predicted engagement in [0.10, 0.95].
    pub engagement_prediction: f64,
}

/// Engagement prediction: base 0.6 shifted by the score's distance from the
/// base score, clamped to [0.10, 0.95].
pub(crate) fn predict_engagement(priority_score: i64) -> f64 {
    let modifier = (priority_score - 50) as f64 / 100.0;
    (0.6 + modifier).clamp(0.10, 0.95)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audience_parses_known_values() {
        assert_eq!(
            TargetAudience::parse("it_recruiters"),
            TargetAudience::ItRecruiters
        );
        assert_eq!(
            TargetAudience::parse("veteran_community"),
            TargetAudience::VeteranCommunity
        );
        assert_eq!(
            TargetAudience::parse("servicenow_professionals"),
            TargetAudience::ServicenowProfessionals
        );
    }

    #[test]
    fn unknown_audience_falls_back_to_general() {
        assert_eq!(TargetAudience::parse("genspark"), TargetAudience::General);
        let parsed: TargetAudience = serde_json::from_str("\"martians\"").unwrap();
        assert_eq!(parsed, TargetAudience::General);
    }

    #[test]
    fn context_rejects_unknown_keys() {
        let result: Result<ScoringContext, _> =
            serde_json::from_str(r#"{"target_audience":"it_recruiters","prioritize":"hard"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn context_default_includes_reasoning() {
        let ctx = ScoringContext::default();
        assert!(ctx.include_reasoning);
        assert!(ctx.target_audience.is_none());

        let ctx: ScoringContext = serde_json::from_str("{}").unwrap();
        assert!(ctx.include_reasoning);
    }

    #[test]
    fn display_weight_buckets() {
        assert_eq!(DisplayWeight::from_score(100), DisplayWeight::High);
        assert_eq!(DisplayWeight::from_score(160), DisplayWeight::High);
        assert_eq!(DisplayWeight::from_score(99), DisplayWeight::Medium);
        assert_eq!(DisplayWeight::from_score(75), DisplayWeight::Medium);
        assert_eq!(DisplayWeight::from_score(74), DisplayWeight::Low);
        assert_eq!(DisplayWeight::from_score(10), DisplayWeight::Low);
    }

    #[test]
    fn engagement_prediction_is_clamped() {
        assert_eq!(predict_engagement(50), 0.6);
        assert_eq!(predict_engagement(160), 0.95);
        assert_eq!(predict_engagement(-100), 0.10);
    }

    #[test]
    fn empty_profile_is_invalid() {
        assert!(!UserProfile::new("  ").is_valid());
        assert!(UserProfile::new("Jordan").is_valid());
    }
}
