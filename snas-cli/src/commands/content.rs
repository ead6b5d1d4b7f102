//! Content generation command

use std::path::Path;

use anyhow::Result;
use clap::Args;
use snas_core::{
    AchievementApi, AchievementStore, ContentType, ScoringContext, SnasConfig, TargetAudience,
};

/// Content generation arguments
#[derive(Args, Debug)]
pub struct ContentArgs {
    /// Achievement id, or its exact name as a fallback lookup
    pub achievement: String,

    /// Content type: linkedin_post, badge_description, professional_summary
    #[arg(long, default_value = "linkedin_post")]
    pub content_type: String,

    /// Target audience
    #[arg(long)]
    pub audience: Option<String>,
}

/// Generate content suggestions for one stored achievement
pub async fn run(args: ContentArgs, config: &SnasConfig, data_dir: &Path) -> Result<()> {
    let Some(content_type) = ContentType::parse(&args.content_type) else {
        anyhow::bail!(
            "unknown content type {:?}; expected linkedin_post, badge_description, or professional_summary",
            args.content_type
        );
    };

    let store = super::open_store(data_dir).await?;
    let api = AchievementApi::new(config, store.clone());

    // Accept an id directly, or fall back to an exact name match
    let id = match store.get(&args.achievement).await? {
        Some(found) => found.id,
        None => {
            let listed = store.list().await?;
            match listed.into_iter().find(|a| a.name == args.achievement) {
                Some(found) => found.id,
                None => anyhow::bail!("no achievement with id or name {:?}", args.achievement),
            }
        }
    };

    let context = ScoringContext {
        target_audience: args.audience.as_deref().map(TargetAudience::parse),
        include_reasoning: true,
    };

    let response = match api.content_suggestions(&id, content_type, &context).await {
        Ok(response) => response,
        Err(err) => {
            let envelope = api.error_response(&err);
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            anyhow::bail!("content generation failed");
        }
    };

    println!(
        "{} suggestion(s) via {} ({} ms, cache hit: {})",
        response.suggestions.len(),
        response.performance.api_source.as_str(),
        response.processing_time_ms,
        response.performance.cache_hit
    );
    for suggestion in &response.suggestions {
        println!();
        println!(
            "[{}] confidence {:.2}",
            suggestion.style, suggestion.confidence
        );
        println!("{}", suggestion.content);
    }
    Ok(())
}
