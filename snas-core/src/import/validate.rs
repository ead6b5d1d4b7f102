//! Per-record validation and transformation

use chrono::NaiveDate;

use super::types::RawRecord;
use crate::achievement::{Achievement, AchievementType, normalize_issuer};

/// Validate one raw record. Returns an empty vec when the record is valid;
/// otherwise one message per problem found.
pub fn validate_record(record: &RawRecord) -> Vec<String> {
    let mut errors = Vec::new();

    let required = [
        ("name", &record.name),
        ("type", &record.kind),
        ("issuer", &record.issuer),
        ("description", &record.description),
        ("category", &record.category),
        ("date_earned", &record.date_earned),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            errors.push(format!("Missing required field: {}", field));
        }
    }

    if !record.kind.trim().is_empty() && AchievementType::parse(&record.kind).is_none() {
        errors.push(
            "Invalid type. Must be one of: certification, badge, achievement".to_string(),
        );
    }

    if !record.date_earned.trim().is_empty() && parse_iso_date(&record.date_earned).is_none() {
        errors.push("Invalid date format. Expected YYYY-MM-DD".to_string());
    }

    errors
}

/// Parse a strictly formatted `YYYY-MM-DD` date. Rejects unpadded or
/// otherwise shaped values chrono alone would tolerate.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    if !bytes
        .iter()
        .enumerate()
        .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit())
    {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Transform a validated raw record into an insertable achievement:
/// trimmed fields, normalized issuer, parsed date, no id (the store
/// assigns one). The caller sets `priority_score`.
///
/// Precondition: `record` passed [`validate_record`]. An unparseable type
/// degrades to the generic achievement kind rather than panicking.
pub fn transform_record(record: &RawRecord) -> Achievement {
    Achievement {
        id: String::new(),
        name: record.name.trim().to_string(),
        kind: AchievementType::parse(&record.kind).unwrap_or(AchievementType::Achievement),
        issuer: normalize_issuer(&record.issuer),
        description: record.description.trim().to_string(),
        category: record.category.trim().to_string(),
        date_earned: parse_iso_date(&record.date_earned),
        priority_score: None,
        active: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_record() -> RawRecord {
        RawRecord {
            name: "ServiceNow Certified System Administrator (CSA)".into(),
            kind: "certification".into(),
            issuer: "ServiceNow".into(),
            description: "Platform administration certification.".into(),
            category: "Platform Administration".into(),
            date_earned: "2024-08-15".into(),
        }
    }

    #[test]
    fn valid_record_passes() {
        assert!(validate_record(&valid_record()).is_empty());
    }

    #[test]
    fn each_missing_required_field_is_reported() {
        let record = RawRecord::default();
        let errors = validate_record(&record);
        assert_eq!(errors.len(), 6);
        assert!(errors[0].contains("name"));
        assert!(errors.iter().any(|e| e.contains("date_earned")));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut record = valid_record();
        record.name = "   ".into();
        let errors = validate_record(&record);
        assert_eq!(errors, vec!["Missing required field: name"]);
    }

    #[test]
    fn invalid_type_is_rejected() {
        let mut record = valid_record();
        record.kind = "diploma".into();
        let errors = validate_record(&record);
        assert!(errors.iter().any(|e| e.contains("Invalid type")));
    }

    #[test]
    fn type_is_case_insensitive() {
        let mut record = valid_record();
        record.kind = "Certification".into();
        assert!(validate_record(&record).is_empty());
    }

    #[test]
    fn malformed_dates_are_rejected() {
        for bad in ["2024/08/15", "15-08-2024", "2024-8-15", "2024-13-01", "yesterday"] {
            let mut record = valid_record();
            record.date_earned = bad.into();
            let errors = validate_record(&record);
            assert!(
                errors.iter().any(|e| e.contains("Invalid date format")),
                "expected rejection for {:?}",
                bad
            );
        }
    }

    #[test]
    fn parse_iso_date_accepts_strict_format_only() {
        assert_eq!(
            parse_iso_date("2024-08-15"),
            NaiveDate::from_ymd_opt(2024, 8, 15)
        );
        assert!(parse_iso_date("2024-8-15").is_none());
        assert!(parse_iso_date("2024-02-30").is_none());
        assert!(parse_iso_date(" 2024-08-15 ").is_some());
    }

    #[test]
    fn transform_trims_and_normalizes() {
        let mut record = valid_record();
        record.name = "  CSA  ".into();
        record.issuer = " service now ".into();
        record.kind = "CERTIFICATION".into();

        let achievement = transform_record(&record);
        assert_eq!(achievement.name, "CSA");
        assert_eq!(achievement.issuer, "ServiceNow");
        assert_eq!(achievement.kind, AchievementType::Certification);
        assert!(achievement.active);
        assert!(achievement.id.is_empty());
        assert_eq!(
            achievement.date_earned,
            NaiveDate::from_ymd_opt(2024, 8, 15)
        );
    }
}
