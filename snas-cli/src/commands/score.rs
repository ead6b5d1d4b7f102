//! Scoring command

use std::path::Path;

use anyhow::Result;
use clap::Args;
use snas_core::{ScoringContext, SnasConfig, TargetAudience, UserProfile};

/// Scoring arguments
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Target audience (it_recruiters, veteran_community,
    /// servicenow_professionals); anything else scores as general
    #[arg(long)]
    pub audience: Option<String>,

    /// Name shown on generated content
    #[arg(long, default_value = "Portfolio Owner")]
    pub profile_name: String,

    /// Omit per-rule reasoning from the output
    #[arg(long)]
    pub no_reasoning: bool,
}

/// Prioritize stored achievements and print the ranking
pub async fn run(args: ScoreArgs, config: &SnasConfig, data_dir: &Path) -> Result<()> {
    let api = super::make_api(config, data_dir).await?;

    let context = ScoringContext {
        target_audience: args.audience.as_deref().map(TargetAudience::parse),
        include_reasoning: !args.no_reasoning,
    };
    let profile = UserProfile::new(&args.profile_name);

    let response = match api.prioritize_stored(&profile, &context).await {
        Ok(response) => response,
        Err(err) => {
            let envelope = api.error_response(&err);
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            anyhow::bail!("prioritization failed");
        }
    };

    if response.badges.is_empty() {
        println!("No active achievements in the store");
        return Ok(());
    }

    println!(
        "{} badge(s), algorithm {}, {} ms",
        response.metadata.total_badges,
        response.metadata.prioritization_algorithm,
        response.processing_time_ms
    );
    for badge in &response.badges {
        println!(
            "  [{:>3}] {} ({}) - {}",
            badge.scored.priority_score,
            badge.scored.achievement.name,
            badge.scored.achievement.issuer,
            badge.scored.display_weight.as_str()
        );
        for reason in &badge.scored.reasoning {
            println!("        - {}", reason);
        }
    }
    Ok(())
}
