//! API facade over the scoring and content engines
//!
//! [`AchievementApi`] is the single entry point boundary callers use.
//! Failures come back as typed errors convertible to the structured
//! [`ErrorResponse`] envelope; nothing here panics or leaks a raw error
//! chain across the boundary.

pub mod types;

use std::sync::Arc;
use std::time::Instant;

use tracing::warn;

pub use types::{
    BadgeContent, ErrorResponse, PrioritizeMetadata, PrioritizeResponse, PrioritizedBadge,
};

use crate::achievement::{Achievement, AchievementStore};
use crate::cache::ContentCache;
use crate::clock::{Clock, SystemClock};
use crate::config::SnasConfig;
use crate::content::{
    AiClient, ContentGenerator, ContentResponse, ContentSource, ContentType, templates,
};
use crate::error::{Result, SnasError};
use crate::metrics::{PerformanceMetrics, PerformanceTracker};
use crate::scoring::{ScoringContext, ScoringEngine, TargetAudience, UserProfile};

/// Confidence attached to fallback badge content.
const FALLBACK_CONFIDENCE: f64 = 0.78;

/// Facade combining scoring, content generation, caching, and metrics.
pub struct AchievementApi {
    engine: ScoringEngine,
    generator: ContentGenerator,
    ai: AiClient,
    store: Arc<dyn AchievementStore>,
    cache: Arc<ContentCache>,
    metrics: Arc<PerformanceTracker>,
    clock: Arc<dyn Clock>,
}

impl AchievementApi {
    /// Build an API instance on the system clock.
    pub fn new(config: &SnasConfig, store: Arc<dyn AchievementStore>) -> Self {
        Self::with_clock(config, store, Arc::new(SystemClock))
    }

    /// Build an API instance with an injected clock (tests pin time).
    pub fn with_clock(
        config: &SnasConfig,
        store: Arc<dyn AchievementStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let metrics = Arc::new(PerformanceTracker::new(config.performance.sla_ms));
        let cache = Arc::new(ContentCache::new(
            chrono::Duration::seconds(config.cache.ttl_secs as i64),
            clock.clone(),
        ));
        let generator = ContentGenerator::new(
            AiClient::new(&config.ai),
            cache.clone(),
            metrics.clone(),
        );

        Self {
            engine: ScoringEngine::new(config.scoring.clone()),
            generator,
            ai: AiClient::new(&config.ai),
            store,
            cache,
            metrics,
            clock,
        }
    }

    /// Score, sort, and content-enhance a caller-supplied badge list.
    pub async fn prioritize(
        &self,
        achievements: &[Achievement],
        profile: &UserProfile,
        context: &ScoringContext,
    ) -> Result<PrioritizeResponse> {
        let started = Instant::now();

        if !profile.is_valid() {
            return Err(SnasError::InvalidInput(
                "user profile is required for prioritization".into(),
            ));
        }

        let scored = self
            .engine
            .score_all(achievements, context, self.clock.today());

        let audience = context.target_audience.unwrap_or(TargetAudience::General);
        let mut badges = Vec::with_capacity(scored.len());
        for item in scored {
            let (content, cache_hit) = self.badge_content(&item.achievement, audience).await;
            badges.push(PrioritizedBadge {
                scored: item,
                content,
                cache_hit,
            });
        }

        let elapsed_ms = started.elapsed().as_millis() as u64;
        let sla_compliant = self.metrics.record_call(elapsed_ms);

        Ok(PrioritizeResponse {
            success: true,
            processing_time_ms: elapsed_ms,
            metadata: PrioritizeMetadata {
                total_badges: badges.len(),
                prioritization_algorithm: "context_aware_veteran_focused_v1",
                sla_compliant,
            },
            badges,
        })
    }

    /// Prioritize every active achievement in the store.
    pub async fn prioritize_stored(
        &self,
        profile: &UserProfile,
        context: &ScoringContext,
    ) -> Result<PrioritizeResponse> {
        let achievements: Vec<Achievement> = self
            .store
            .list()
            .await?
            .into_iter()
            .filter(|a| a.active)
            .collect();
        self.prioritize(&achievements, profile, context).await
    }

    /// Generate content suggestions for a stored achievement.
    pub async fn content_suggestions(
        &self,
        achievement_id: &str,
        content_type: ContentType,
        context: &ScoringContext,
    ) -> Result<ContentResponse> {
        let achievement = self
            .store
            .get(achievement_id)
            .await?
            .ok_or_else(|| SnasError::RecordNotFound(achievement_id.to_string()))?;

        Ok(self.generator.generate(&achievement, content_type, context).await)
    }

    /// Convert an error into the boundary envelope.
    pub fn error_response(&self, err: &SnasError) -> ErrorResponse {
        ErrorResponse::new(err, self.clock.now())
    }

    /// Snapshot of the performance counters.
    pub fn metrics(&self) -> PerformanceMetrics {
        self.metrics.snapshot()
    }

    /// Content for one badge: cached, AI-generated, or template fallback.
    async fn badge_content(
        &self,
        achievement: &Achievement,
        audience: TargetAudience,
    ) -> (BadgeContent, bool) {
        let key = ContentCache::badge_key(&achievement.id, audience);

        if let Some(cached) = self.cache.get::<BadgeContent>(&key).await {
            self.metrics.record_cache_hit();
            return (cached, true);
        }

        let content = if self.ai.is_available() {
            match self.ai.analyze_achievement(achievement, audience).await {
                Ok(analysis) => BadgeContent {
                    linkedin_post: analysis.linkedin_post,
                    professional_summary: analysis.summary,
                    confidence: analysis.confidence,
                    source: ContentSource::ManusAi,
                },
                Err(err) => {
                    warn!(error = %err, "AI badge enhancement failed, using fallback");
                    Self::fallback_badge_content(achievement)
                }
            }
        } else {
            Self::fallback_badge_content(achievement)
        };

        self.cache.set(key, &content).await;
        (content, false)
    }

    fn fallback_badge_content(achievement: &Achievement) -> BadgeContent {
        let post = templates::fallback_suggestions(achievement, ContentType::LinkedinPost)
            .into_iter()
            .next()
            .map(|s| s.content)
            .unwrap_or_default();
        let summary =
            templates::fallback_suggestions(achievement, ContentType::ProfessionalSummary)
                .into_iter()
                .next()
                .map(|s| s.content)
                .unwrap_or_default();

        BadgeContent {
            linkedin_post: post,
            professional_summary: summary,
            confidence: FALLBACK_CONFIDENCE,
            source: ContentSource::EnhancedFallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievement::{AchievementType, MemoryAchievementStore};
    use crate::clock::FixedClock;
    use chrono::{Duration, TimeZone, Utc};

    fn fixed_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        ))
    }

    async fn api_with_store() -> (AchievementApi, Arc<MemoryAchievementStore>, Arc<FixedClock>)
    {
        let store = Arc::new(MemoryAchievementStore::new());
        let clock = fixed_clock();
        let api = AchievementApi::with_clock(&SnasConfig::default(), store.clone(), clock.clone());
        (api, store, clock)
    }

    fn csa(clock: &FixedClock) -> Achievement {
        let mut a = Achievement::new(
            "Certified System Administrator (CSA)",
            AchievementType::Certification,
            "ServiceNow",
        );
        a.category = "Platform Administration".into();
        a.date_earned = Some(clock.today() - Duration::days(30));
        a
    }

    #[tokio::test]
    async fn prioritize_rejects_missing_profile() {
        let (api, _store, _clock) = api_with_store().await;
        let err = api
            .prioritize(&[], &UserProfile::new(""), &ScoringContext::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SnasError::InvalidInput(_)));
        assert_eq!(api.error_response(&err).status_code, 400);
    }

    #[tokio::test]
    async fn prioritize_scores_sorts_and_enhances() {
        let (api, _store, clock) = api_with_store().await;
        let low = Achievement::new("Plain Badge", AchievementType::Badge, "Acme");
        let high = csa(&clock);

        let response = api
            .prioritize(
                &[low, high],
                &UserProfile::new("Jordan"),
                &ScoringContext::for_audience(TargetAudience::ItRecruiters),
            )
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.metadata.total_badges, 2);
        assert_eq!(
            response.badges[0].scored.achievement.name,
            "Certified System Administrator (CSA)"
        );
        assert_eq!(response.badges[0].scored.priority_score, 160);
        assert_eq!(
            response.badges[0].content.source,
            ContentSource::EnhancedFallback
        );
        assert!(
            response.badges[0]
                .content
                .linkedin_post
                .contains("Certified System Administrator (CSA)")
        );
    }

    #[tokio::test]
    async fn repeated_prioritization_hits_badge_cache() {
        let (api, _store, clock) = api_with_store().await;
        let badge = csa(&clock);
        let profile = UserProfile::new("Jordan");
        let ctx = ScoringContext::default();

        let first = api.prioritize(std::slice::from_ref(&badge), &profile, &ctx)
            .await
            .unwrap();
        let second = api.prioritize(std::slice::from_ref(&badge), &profile, &ctx)
            .await
            .unwrap();

        assert!(!first.badges[0].cache_hit);
        assert!(second.badges[0].cache_hit);
        assert_eq!(api.metrics().cache_hits, 1);
    }

    #[tokio::test]
    async fn prioritize_stored_skips_inactive_records() {
        let (api, store, clock) = api_with_store().await;
        store.insert(csa(&clock)).await.unwrap();
        let mut inactive = Achievement::new("Retired Badge", AchievementType::Badge, "Acme");
        inactive.active = false;
        store.insert(inactive).await.unwrap();

        let response = api
            .prioritize_stored(&UserProfile::new("Jordan"), &ScoringContext::default())
            .await
            .unwrap();
        assert_eq!(response.metadata.total_badges, 1);
    }

    #[tokio::test]
    async fn content_suggestions_for_unknown_id_is_not_found() {
        let (api, _store, _clock) = api_with_store().await;
        let err = api
            .content_suggestions("ghost", ContentType::LinkedinPost, &ScoringContext::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SnasError::RecordNotFound(_)));
        assert_eq!(api.error_response(&err).status_code, 404);
    }

    #[tokio::test]
    async fn content_suggestions_returns_generated_content() {
        let (api, store, clock) = api_with_store().await;
        let id = store.insert(csa(&clock)).await.unwrap();

        let response = api
            .content_suggestions(&id, ContentType::LinkedinPost, &ScoringContext::default())
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.suggestions.len(), 3);
        assert!(
            response.suggestions[0]
                .content
                .contains("Certified System Administrator (CSA)")
        );
    }

    #[tokio::test]
    async fn metrics_accumulate_per_api_instance() {
        let (api, _store, clock) = api_with_store().await;
        let (other, _s, _c) = api_with_store().await;

        api.prioritize(
            &[csa(&clock)],
            &UserProfile::new("Jordan"),
            &ScoringContext::default(),
        )
        .await
        .unwrap();

        assert_eq!(api.metrics().api_call_count, 1);
        assert_eq!(other.metrics().api_call_count, 0);
    }
}
