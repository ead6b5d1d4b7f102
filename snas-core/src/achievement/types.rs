//! Achievement entity types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Canonical spelling of the host-platform issuer.
pub const PLATFORM_ISSUER: &str = "ServiceNow";

/// Kind of professional achievement. Closed enumeration; anything else is
/// rejected at import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementType {
    Certification,
    Badge,
    Achievement,
}

impl AchievementType {
    /// Parse a type string, case-insensitively. Returns `None` for values
    /// outside the closed set.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "certification" => Some(Self::Certification),
            "badge" => Some(Self::Badge),
            "achievement" => Some(Self::Achievement),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Certification => "certification",
            Self::Badge => "badge",
            Self::Achievement => "achievement",
        }
    }
}

/// A single certification, badge, or recognition record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    /// Opaque unique identifier, assigned at insert when empty.
    #[serde(default)]
    pub id: String,
    /// Display title.
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AchievementType,
    /// Issuing organization, normalized via [`normalize_issuer`].
    pub issuer: String,
    #[serde(default)]
    pub description: String,
    /// Free-text classification used for audience boosting and template
    /// selection.
    #[serde(default)]
    pub category: String,
    /// Date the achievement was earned. Absent dates score as maximally
    /// stale.
    #[serde(default)]
    pub date_earned: Option<NaiveDate>,
    /// Computed priority in [10, 100] for imported records. `None` until a
    /// scoring pass runs.
    #[serde(default)]
    pub priority_score: Option<i64>,
    /// Lifecycle flag; inactive records are excluded from scoring batches.
    /// Missing values default to active.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Achievement {
    /// Create a new active achievement with a generated id.
    pub fn new(
        name: impl Into<String>,
        kind: AchievementType,
        issuer: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            kind,
            issuer: normalize_issuer(&issuer.into()),
            description: String::new(),
            category: String::new(),
            date_earned: None,
            priority_score: None,
            active: true,
        }
    }

    /// Whether the issuer is the host platform.
    pub fn is_platform_issued(&self) -> bool {
        self.issuer.to_lowercase().contains("servicenow")
    }
}

/// Normalize an issuer name: trim whitespace and collapse any spelling
/// variant of the platform name ("Service Now", "service-now", ...) to the
/// canonical [`PLATFORM_ISSUER`].
pub fn normalize_issuer(raw: &str) -> String {
    let trimmed = raw.trim();
    let collapsed: String = trimmed
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_' | '.'))
        .collect::<String>()
        .to_lowercase();
    if collapsed == "servicenow" {
        PLATFORM_ISSUER.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_all_closed_enum_values() {
        assert_eq!(
            AchievementType::parse("certification"),
            Some(AchievementType::Certification)
        );
        assert_eq!(AchievementType::parse("Badge"), Some(AchievementType::Badge));
        assert_eq!(
            AchievementType::parse(" ACHIEVEMENT "),
            Some(AchievementType::Achievement)
        );
    }

    #[test]
    fn parse_rejects_unknown_types() {
        assert_eq!(AchievementType::parse("diploma"), None);
        assert_eq!(AchievementType::parse(""), None);
    }

    #[test]
    fn normalize_collapses_platform_variants() {
        assert_eq!(normalize_issuer("ServiceNow"), "ServiceNow");
        assert_eq!(normalize_issuer("  SERVICENOW  "), "ServiceNow");
        assert_eq!(normalize_issuer("Service Now"), "ServiceNow");
        assert_eq!(normalize_issuer("service-now"), "ServiceNow");
    }

    #[test]
    fn normalize_leaves_other_issuers_trimmed() {
        assert_eq!(normalize_issuer("  CompTIA "), "CompTIA");
        assert_eq!(normalize_issuer("U.S. Navy"), "U.S. Navy");
    }

    #[test]
    fn new_assigns_id_and_normalizes_issuer() {
        let a = Achievement::new("CSA", AchievementType::Certification, "service now");
        assert!(!a.id.is_empty());
        assert_eq!(a.issuer, "ServiceNow");
        assert!(a.active);
        assert!(a.priority_score.is_none());
    }

    #[test]
    fn is_platform_issued_matches_case_insensitively() {
        let mut a = Achievement::new("x", AchievementType::Badge, "ServiceNow University");
        assert!(a.is_platform_issued());
        a.issuer = "CompTIA".into();
        assert!(!a.is_platform_issued());
    }

    #[test]
    fn serde_round_trip_uses_type_field_name() {
        let a = Achievement::new("CSA", AchievementType::Certification, "ServiceNow");
        let json = serde_json::to_string(&a).unwrap();
        assert!(json.contains("\"type\":\"certification\""));

        let back: Achievement = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "CSA");
        assert_eq!(back.kind, AchievementType::Certification);
    }

    #[test]
    fn missing_active_defaults_to_true() {
        let json = r#"{"name":"CSA","type":"certification","issuer":"ServiceNow"}"#;
        let a: Achievement = serde_json::from_str(json).unwrap();
        assert!(a.active);
        assert!(a.date_earned.is_none());
    }
}
