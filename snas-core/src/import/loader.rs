//! Batched data loading against the achievement store

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use super::types::{ImportOptions, ImportResult, RawRecord, RecordFailure};
use super::validate::{transform_record, validate_record};
use crate::achievement::{Achievement, AchievementStore};
use crate::clock::Clock;
use crate::error::{ImportError, StoreError};
use crate::scoring::ScoringEngine;

/// Outcome of a single-record upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created(String),
    Updated(String),
}

/// Outcome of a backfill pass over existing records.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct RepairSummary {
    pub updated_records: usize,
    pub error_count: usize,
}

/// Validates, transforms, scores, and persists achievement records.
pub struct DataLoader {
    store: Arc<dyn AchievementStore>,
    engine: ScoringEngine,
    clock: Arc<dyn Clock>,
}

impl DataLoader {
    pub fn new(
        store: Arc<dyn AchievementStore>,
        engine: ScoringEngine,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            engine,
            clock,
        }
    }

    /// Bulk-import records in fixed-size batches.
    ///
    /// Per-record validation failures and insert errors are collected into
    /// the result and never abort the run; only store-level failures on the
    /// surrounding operations (clearing, duplicate lookup) surface as `Err`.
    pub async fn populate(
        &self,
        records: &[RawRecord],
        options: &ImportOptions,
    ) -> Result<ImportResult, ImportError> {
        let started = Instant::now();
        let batch_size = options.batch_size.max(1);

        info!(
            total = records.len(),
            batch_size,
            validate_only = options.validate_only,
            "starting achievement data population"
        );

        if records.is_empty() {
            return Ok(ImportResult {
                success: false,
                message: "No achievement records supplied".into(),
                total_records: 0,
                successful_imports: 0,
                failed_imports: 0,
                duplicates_skipped: 0,
                errors: Vec::new(),
                processing_time_ms: started.elapsed().as_millis() as u64,
                validation_only: options.validate_only,
                batch_size,
                processed: Vec::new(),
            });
        }

        if options.clear_existing && !options.validate_only {
            let removed = self.store.delete_all().await?;
            info!(removed, "cleared existing achievement data");
        }

        let mut successful_imports = 0;
        let mut failed_imports = 0;
        let mut duplicates_skipped = 0;
        let mut errors: Vec<RecordFailure> = Vec::new();
        let mut processed: Vec<Achievement> = Vec::new();

        let today = self.clock.today();
        let batch_count = records.len().div_ceil(batch_size);

        for (batch_index, batch) in records.chunks(batch_size).enumerate() {
            for (offset, record) in batch.iter().enumerate() {
                let row = batch_index * batch_size + offset + 1;

                let problems = validate_record(record);
                if !problems.is_empty() {
                    failed_imports += 1;
                    errors.push(RecordFailure {
                        row,
                        message: problems.join(", "),
                    });
                    continue;
                }

                let mut achievement = transform_record(record);
                achievement.priority_score =
                    Some(self.engine.import_score(&achievement, today));

                if options.validate_only {
                    processed.push(achievement);
                    continue;
                }

                let existing = self
                    .store
                    .find_by_name_issuer(&achievement.name, &achievement.issuer)
                    .await?;
                if existing.is_some() {
                    duplicates_skipped += 1;
                    debug!(name = %achievement.name, "skipping duplicate record");
                    continue;
                }

                match self.store.insert(achievement.clone()).await {
                    Ok(id) => {
                        successful_imports += 1;
                        achievement.id = id;
                        processed.push(achievement);
                    }
                    // A concurrent import won the race; same outcome as the
                    // lookup above
                    Err(StoreError::Duplicate { .. }) => {
                        duplicates_skipped += 1;
                    }
                    Err(err) => {
                        failed_imports += 1;
                        errors.push(RecordFailure {
                            row,
                            message: format!("Failed to insert record: {}", err),
                        });
                    }
                }
            }

            info!(
                batch = batch_index + 1,
                of = batch_count,
                "processed import batch"
            );
        }

        Ok(ImportResult {
            success: true,
            message: if options.validate_only {
                "Validation completed".into()
            } else {
                "Data import completed".into()
            },
            total_records: records.len(),
            successful_imports,
            failed_imports,
            duplicates_skipped,
            errors,
            processing_time_ms: started.elapsed().as_millis() as u64,
            validation_only: options.validate_only,
            batch_size,
            processed,
        })
    }

    /// Create-or-update a single record keyed on `(name, issuer)`.
    ///
    /// Unlike [`Self::populate`], which skips duplicates, this path updates
    /// the existing record in place. Both behaviors are intentional.
    pub async fn upsert(&self, record: &RawRecord) -> Result<UpsertOutcome, ImportError> {
        let problems = validate_record(record);
        if !problems.is_empty() {
            return Err(ImportError::Validation(problems.join(", ")));
        }

        let mut achievement = transform_record(record);
        achievement.priority_score =
            Some(self.engine.import_score(&achievement, self.clock.today()));

        match self
            .store
            .find_by_name_issuer(&achievement.name, &achievement.issuer)
            .await?
        {
            Some(existing) => {
                achievement.id = existing.id;
                achievement.active = existing.active;
                self.store.update(&achievement).await?;
                Ok(UpsertOutcome::Updated(achievement.id))
            }
            None => {
                let id = self.store.insert(achievement).await?;
                Ok(UpsertOutcome::Created(id))
            }
        }
    }

    /// Backfill pass over existing records: compute `priority_score` where
    /// missing or zero. Individual record failures are counted, not fatal.
    pub async fn validate_and_update_existing(&self) -> Result<RepairSummary, ImportError> {
        let today = self.clock.today();
        let mut summary = RepairSummary::default();

        for mut achievement in self.store.list().await? {
            let needs_score = matches!(achievement.priority_score, None | Some(0));
            if !needs_score {
                continue;
            }
            achievement.priority_score = Some(self.engine.import_score(&achievement, today));
            match self.store.update(&achievement).await {
                Ok(()) => summary.updated_records += 1,
                Err(err) => {
                    tracing::error!(id = %achievement.id, error = %err, "failed to update record");
                    summary.error_count += 1;
                }
            }
        }

        info!(
            updated = summary.updated_records,
            errors = summary.error_count,
            "validation and update completed"
        );
        Ok(summary)
    }

    /// Import the built-in sample portfolio, replacing existing data.
    pub async fn import_defaults(&self) -> Result<ImportResult, ImportError> {
        self.populate(
            &sample_records(),
            &ImportOptions {
                clear_existing: true,
                validate_only: false,
                batch_size: 10,
            },
        )
        .await
    }
}

/// Built-in sample portfolio used for seeding and tests.
pub fn sample_records() -> Vec<RawRecord> {
    fn record(
        name: &str,
        kind: &str,
        issuer: &str,
        description: &str,
        category: &str,
        date_earned: &str,
    ) -> RawRecord {
        RawRecord {
            name: name.into(),
            kind: kind.into(),
            issuer: issuer.into(),
            description: description.into(),
            category: category.into(),
            date_earned: date_earned.into(),
        }
    }

    vec![
        record(
            "ServiceNow Certified System Administrator (CSA)",
            "certification",
            "ServiceNow",
            "Comprehensive platform administration certification covering system configuration, \
             user management, and platform maintenance.",
            "Platform Administration",
            "2024-08-15",
        ),
        record(
            "ServiceNow Certified Implementation Specialist - ITSM",
            "certification",
            "ServiceNow",
            "Advanced ITSM implementation certification covering incident, problem, change, and \
             service catalog management.",
            "ITSM Implementation",
            "2024-07-22",
        ),
        record(
            "United States Military Service",
            "achievement",
            "U.S. Navy",
            "Honorable military service demonstrating commitment to excellence and leadership \
             under pressure.",
            "Service Excellence",
            "2020-12-20",
        ),
        record(
            "Military Leadership Excellence",
            "achievement",
            "U.S. Navy",
            "Demonstrated exceptional leadership capabilities in high-pressure environments with \
             focus on team development and mission success.",
            "Leadership",
            "2020-03-15",
        ),
        record(
            "CompTIA Security+",
            "certification",
            "CompTIA",
            "Cybersecurity certification covering security principles, risk management, and \
             incident response.",
            "Security",
            "2023-10-22",
        ),
        record(
            "Project Management Professional (PMP)",
            "certification",
            "PMI",
            "Project management certification across the project lifecycle with emphasis on \
             agile methodologies.",
            "Project Management",
            "2024-06-12",
        ),
        record(
            "Veteran Mentorship Leadership",
            "achievement",
            "Hiring Our Heroes",
            "Award for exceptional mentorship of transitioning veterans in technology careers.",
            "Veteran Advocacy",
            "2024-06-15",
        ),
        record(
            "AI-Powered Widget Development",
            "achievement",
            "ServiceNow",
            "Development of AI-enhanced platform widgets integrating machine learning \
             capabilities for intelligent user experiences.",
            "Innovation",
            "2024-09-15",
        ),
    ]
}
