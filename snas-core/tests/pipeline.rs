//! End-to-end pipeline tests
//!
//! These tests drive the full path an operator would: bulk import into a
//! store, prioritize what was stored, and generate content, validating
//! that the import-time and live scoring formulas coexist as documented.

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use snas_core::{
    AchievementApi, AchievementStore, Clock, ContentType, DataLoader, FixedClock, ImportOptions,
    MemoryAchievementStore, RawRecord, ScoringContext, ScoringEngine, SnasConfig, TargetAudience,
    UserProfile,
};

fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2024, 9, 20, 12, 0, 0).unwrap(),
    ))
}

fn csa_record(clock: &FixedClock) -> RawRecord {
    let earned = (clock.today() - Duration::days(30)).format("%Y-%m-%d");
    RawRecord {
        name: "Certified System Administrator (CSA)".into(),
        kind: "certification".into(),
        issuer: "ServiceNow".into(),
        description: "Platform administration certification.".into(),
        category: "Platform Administration".into(),
        date_earned: earned.to_string(),
    }
}

fn loader_for(store: Arc<MemoryAchievementStore>, clock: Arc<FixedClock>) -> DataLoader {
    DataLoader::new(store, ScoringEngine::default(), clock)
}

#[tokio::test]
async fn import_then_prioritize_applies_both_formulas() {
    let store = Arc::new(MemoryAchievementStore::new());
    let clock = fixed_clock();
    let loader = loader_for(store.clone(), clock.clone());

    let result = loader
        .populate(&[csa_record(&clock)], &ImportOptions::default())
        .await
        .unwrap();
    assert_eq!(result.successful_imports, 1);

    // Import-time formula: clamped to the cap
    let stored = store.list().await.unwrap();
    assert_eq!(stored[0].priority_score, Some(100));

    // Live formula on the same record: unclamped
    let api = AchievementApi::with_clock(&SnasConfig::default(), store, clock);
    let response = api
        .prioritize_stored(
            &UserProfile::new("Jordan"),
            &ScoringContext::for_audience(TargetAudience::ItRecruiters),
        )
        .await
        .unwrap();

    assert_eq!(response.badges.len(), 1);
    assert_eq!(response.badges[0].scored.priority_score, 160);
    assert_eq!(response.badges[0].scored.reasoning.len(), 5);
}

#[tokio::test]
async fn bulk_skip_and_upsert_update_coexist() {
    let store = Arc::new(MemoryAchievementStore::new());
    let clock = fixed_clock();
    let loader = loader_for(store.clone(), clock.clone());

    let record = csa_record(&clock);
    loader
        .populate(std::slice::from_ref(&record), &ImportOptions::default())
        .await
        .unwrap();

    // Bulk path: same (name, issuer) is skipped, not overwritten
    let mut renamed_description = record.clone();
    renamed_description.description = "Bulk re-import should not apply this.".into();
    let second = loader
        .populate(&[renamed_description.clone()], &ImportOptions::default())
        .await
        .unwrap();
    assert_eq!(second.duplicates_skipped, 1);
    let stored = store.list().await.unwrap();
    assert_eq!(stored[0].description, "Platform administration certification.");

    // Upsert path: same key updates in place
    loader.upsert(&renamed_description).await.unwrap();
    let stored = store.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(
        stored[0].description,
        "Bulk re-import should not apply this."
    );
}

#[tokio::test]
async fn content_for_imported_achievement_references_it_by_name() {
    let store = Arc::new(MemoryAchievementStore::new());
    let clock = fixed_clock();
    let loader = loader_for(store.clone(), clock.clone());

    let mut record = csa_record(&clock);
    record.name = "Military Leadership Excellence".into();
    record.kind = "achievement".into();
    record.issuer = "U.S. Navy".into();
    record.category = "Leadership".into();
    loader
        .populate(&[record], &ImportOptions::default())
        .await
        .unwrap();
    let id = store.list().await.unwrap()[0].id.clone();

    let api = AchievementApi::with_clock(&SnasConfig::default(), store, clock);
    let response = api
        .content_suggestions(&id, ContentType::LinkedinPost, &ScoringContext::default())
        .await
        .unwrap();

    assert!(response.success);
    for suggestion in &response.suggestions {
        assert!(suggestion.content.contains("Military Leadership Excellence"));
    }

    // Second call is served from cache
    let again = api
        .content_suggestions(&id, ContentType::LinkedinPost, &ScoringContext::default())
        .await
        .unwrap();
    assert!(again.performance.cache_hit);
    assert_eq!(api.metrics().cache_hits, 1);
}
