//! Import pipeline types

use serde::{Deserialize, Serialize};

use crate::achievement::Achievement;

/// Default number of records processed per batch.
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// An unvalidated inbound record. All fields arrive as strings; validation
/// and transformation happen in the loader.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date_earned: String,
}

/// Options for a bulk import run.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Delete all existing achievements before importing.
    pub clear_existing: bool,
    /// Validate and transform without writing anything.
    pub validate_only: bool,
    /// Records per batch. Batch boundaries only affect progress reporting;
    /// there is no atomicity across or within a batch.
    pub batch_size: usize,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            clear_existing: false,
            validate_only: false,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// A single record's failure, referencing its 1-based row.
#[derive(Debug, Clone, Serialize)]
pub struct RecordFailure {
    pub row: usize,
    pub message: String,
}

/// Aggregate outcome of a bulk import run.
#[derive(Debug, Clone, Serialize)]
pub struct ImportResult {
    pub success: bool,
    pub message: String,
    pub total_records: usize,
    pub successful_imports: usize,
    pub failed_imports: usize,
    pub duplicates_skipped: usize,
    pub errors: Vec<RecordFailure>,
    pub processing_time_ms: u64,
    pub validation_only: bool,
    pub batch_size: usize,
    /// Transformed records: inserted ones during a real import, would-be
    /// records during a dry run.
    pub processed: Vec<Achievement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_record_tolerates_missing_fields() {
        let record: RawRecord = serde_json::from_str(r#"{"name":"CSA"}"#).unwrap();
        assert_eq!(record.name, "CSA");
        assert!(record.kind.is_empty());
        assert!(record.date_earned.is_empty());
    }

    #[test]
    fn raw_record_reads_type_field() {
        let record: RawRecord =
            serde_json::from_str(r#"{"name":"CSA","type":"certification"}"#).unwrap();
        assert_eq!(record.kind, "certification");
    }

    #[test]
    fn default_options_use_documented_batch_size() {
        let options = ImportOptions::default();
        assert_eq!(options.batch_size, 50);
        assert!(!options.clear_existing);
        assert!(!options.validate_only);
    }
}
