//! Tunable scoring weights

use serde::{Deserialize, Serialize};

/// Boost constants for both scoring formulas. All externally configurable;
/// the defaults match the documented algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Starting score every achievement receives.
    #[serde(default = "default_base_score")]
    pub base_score: i64,

    /// Name contains "csa" (case-insensitive).
    #[serde(default = "default_csa_boost")]
    pub csa_boost: i64,

    /// Earned within the recency window.
    #[serde(default = "default_recency_boost")]
    pub recency_boost: i64,

    /// Recency window in days, boundary inclusive.
    #[serde(default = "default_recency_window_days")]
    pub recency_window_days: i64,

    /// Type is certification.
    #[serde(default = "default_certification_boost")]
    pub certification_boost: i64,

    /// Issuer contains the platform name.
    #[serde(default = "default_platform_boost")]
    pub platform_boost: i64,

    /// it_recruiters audience: name contains "CSA" or "CIS".
    #[serde(default = "default_it_recruiters_boost")]
    pub it_recruiters_boost: i64,

    /// veteran_community audience: description mentions leadership.
    #[serde(default = "default_veteran_community_boost")]
    pub veteran_community_boost: i64,

    /// servicenow_professionals audience: platform-issued.
    #[serde(default = "default_servicenow_professionals_boost")]
    pub servicenow_professionals_boost: i64,

    /// Import formula: veteran keyword in name or description.
    #[serde(default = "default_veteran_keyword_boost")]
    pub veteran_keyword_boost: i64,

    /// Import formula clamp floor.
    #[serde(default = "default_score_floor")]
    pub score_floor: i64,

    /// Import formula clamp cap.
    #[serde(default = "default_score_cap")]
    pub score_cap: i64,
}

fn default_base_score() -> i64 {
    50
}

fn default_csa_boost() -> i64 {
    25
}

fn default_recency_boost() -> i64 {
    20
}

fn default_recency_window_days() -> i64 {
    90
}

fn default_certification_boost() -> i64 {
    30
}

fn default_platform_boost() -> i64 {
    15
}

fn default_it_recruiters_boost() -> i64 {
    20
}

fn default_veteran_community_boost() -> i64 {
    15
}

fn default_servicenow_professionals_boost() -> i64 {
    25
}

fn default_veteran_keyword_boost() -> i64 {
    15
}

fn default_score_floor() -> i64 {
    10
}

fn default_score_cap() -> i64 {
    100
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base_score: default_base_score(),
            csa_boost: default_csa_boost(),
            recency_boost: default_recency_boost(),
            recency_window_days: default_recency_window_days(),
            certification_boost: default_certification_boost(),
            platform_boost: default_platform_boost(),
            it_recruiters_boost: default_it_recruiters_boost(),
            veteran_community_boost: default_veteran_community_boost(),
            servicenow_professionals_boost: default_servicenow_professionals_boost(),
            veteran_keyword_boost: default_veteran_keyword_boost(),
            score_floor: default_score_floor(),
            score_cap: default_score_cap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_algorithm() {
        let w = ScoringWeights::default();
        assert_eq!(w.base_score, 50);
        assert_eq!(w.csa_boost, 25);
        assert_eq!(w.recency_boost, 20);
        assert_eq!(w.recency_window_days, 90);
        assert_eq!(w.certification_boost, 30);
        assert_eq!(w.platform_boost, 15);
        assert_eq!(w.score_floor, 10);
        assert_eq!(w.score_cap, 100);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let w: ScoringWeights = toml::from_str("").unwrap();
        assert_eq!(w.csa_boost, 25);
        assert_eq!(w.servicenow_professionals_boost, 25);
    }

    #[test]
    fn toml_overrides_single_field() {
        let w: ScoringWeights = toml::from_str("csa_boost = 40").unwrap();
        assert_eq!(w.csa_boost, 40);
        // Everything else stays at default
        assert_eq!(w.certification_boost, 30);
    }
}
