//! Content generation service
//!
//! Orchestrates cache lookup, AI/fallback path selection, and SLA
//! instrumentation for content-suggestion calls.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use super::ai::AiClient;
use super::templates::fallback_suggestions;
use super::types::{
    ContentPerformance, ContentResponse, ContentSource, ContentSuggestion, ContentType,
};
use crate::achievement::Achievement;
use crate::cache::ContentCache;
use crate::metrics::PerformanceTracker;
use crate::scoring::{ScoringContext, TargetAudience};

/// Generates audience-aware content suggestions for achievements.
pub struct ContentGenerator {
    ai: AiClient,
    cache: Arc<ContentCache>,
    metrics: Arc<PerformanceTracker>,
}

impl ContentGenerator {
    pub fn new(ai: AiClient, cache: Arc<ContentCache>, metrics: Arc<PerformanceTracker>) -> Self {
        Self { ai, cache, metrics }
    }

    /// Generate suggestions for one achievement.
    ///
    /// Checks the cache first; on a miss, uses the AI backend when a
    /// credential is configured and falls back to templates on any AI
    /// failure. The call never fails: the fallback path always produces
    /// content.
    pub async fn generate(
        &self,
        achievement: &Achievement,
        content_type: ContentType,
        context: &ScoringContext,
    ) -> ContentResponse {
        let started = Instant::now();
        let audience = context.target_audience.unwrap_or(TargetAudience::General);
        let key = ContentCache::content_key(&achievement.id, content_type, audience);

        let api_source = if self.ai.is_available() {
            ContentSource::ManusAi
        } else {
            ContentSource::EnhancedFallback
        };

        if let Some(cached) = self.cache.get::<Vec<ContentSuggestion>>(&key).await {
            self.metrics.record_cache_hit();
            let elapsed_ms = started.elapsed().as_millis() as u64;
            let sla_compliant = self.metrics.record_call(elapsed_ms);
            debug!(key, "content cache hit");
            return ContentResponse {
                success: true,
                processing_time_ms: elapsed_ms,
                content_type,
                suggestions: cached,
                performance: ContentPerformance {
                    sla_compliant,
                    cache_hit: true,
                    api_source,
                },
            };
        }

        let (suggestions, api_source) = if self.ai.is_available() {
            match self.ai.analyze_achievement(achievement, audience).await {
                Ok(analysis) => {
                    let content = match content_type {
                        ContentType::LinkedinPost => analysis.linkedin_post,
                        ContentType::BadgeDescription | ContentType::ProfessionalSummary => {
                            analysis.summary
                        }
                    };
                    let suggestions = vec![ContentSuggestion {
                        content,
                        confidence: analysis.confidence,
                        veteran_aligned: true,
                        style: "ai_generated".into(),
                    }];
                    (suggestions, ContentSource::ManusAi)
                }
                Err(err) => {
                    warn!(error = %err, "AI content generation failed, using fallback");
                    (
                        fallback_suggestions(achievement, content_type),
                        ContentSource::EnhancedFallback,
                    )
                }
            }
        } else {
            (
                fallback_suggestions(achievement, content_type),
                ContentSource::EnhancedFallback,
            )
        };

        self.cache.set(key, &suggestions).await;

        let elapsed_ms = started.elapsed().as_millis() as u64;
        let sla_compliant = self.metrics.record_call(elapsed_ms);

        ContentResponse {
            success: true,
            processing_time_ms: elapsed_ms,
            content_type,
            suggestions,
            performance: ContentPerformance {
                sla_compliant,
                cache_hit: false,
                api_source,
            },
        }
    }
}
