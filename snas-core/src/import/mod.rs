//! Bulk import and validation for achievement records
//!
//! [`DataLoader::populate`] validates, transforms, scores, and inserts
//! externally supplied records in fixed-size batches, collecting per-record
//! failures instead of aborting. Duplicate `(name, issuer)` pairs are
//! skipped here; the single-record [`DataLoader::upsert`] path updates them
//! instead. That asymmetry is inherited behavior and both sides of it are
//! kept.

pub mod loader;
pub mod types;
pub mod validate;

pub use loader::{DataLoader, RepairSummary, UpsertOutcome, sample_records};
pub use types::{ImportOptions, ImportResult, RawRecord, RecordFailure};
