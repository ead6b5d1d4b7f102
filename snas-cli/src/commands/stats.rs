//! Store statistics command

use std::path::Path;

use anyhow::Result;
use snas_core::{AchievementStore, AchievementType};

/// Print store statistics
pub async fn run(data_dir: &Path) -> Result<()> {
    let store = super::open_store(data_dir).await?;
    let records = store.list().await?;

    if records.is_empty() {
        println!("Store is empty");
        return Ok(());
    }

    let active = records.iter().filter(|a| a.active).count();
    let count_of = |kind: AchievementType| records.iter().filter(|a| a.kind == kind).count();
    let scored: Vec<i64> = records
        .iter()
        .filter(|a| a.active)
        .filter_map(|a| a.priority_score)
        .collect();

    println!("{} achievement(s), {} active", records.len(), active);
    println!(
        "  certifications: {}  badges: {}  achievements: {}",
        count_of(AchievementType::Certification),
        count_of(AchievementType::Badge),
        count_of(AchievementType::Achievement)
    );

    if !scored.is_empty() {
        let sum: i64 = scored.iter().sum();
        let max = scored.iter().max().unwrap_or(&0);
        println!(
            "  priority: avg {:.1}, max {} ({} scored)",
            sum as f64 / scored.len() as f64,
            max,
            scored.len()
        );
    }
    Ok(())
}
