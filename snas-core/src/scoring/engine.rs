//! The scoring engine: live and import formulas

use chrono::NaiveDate;

use super::types::{
    DisplayWeight, ScoredAchievement, ScoringContext, TargetAudience, predict_engagement,
};
use super::weights::ScoringWeights;
use crate::achievement::{Achievement, AchievementType};

/// Days-since value assigned when `date_earned` is absent: old enough that
/// no recency window can match.
const STALE_DAYS: i64 = 999;

/// Keywords marking platform relevance in the import formula.
const SERVICENOW_KEYWORDS: [&str; 5] = ["servicenow", "csa", "cis", "itsm", "platform"];

/// Keywords marking veteran/military relevance in the import formula.
const VETERAN_KEYWORDS: [&str; 6] = [
    "military",
    "navy",
    "veteran",
    "leadership",
    "service",
    "mentorship",
];

/// Computes priority scores from achievement attributes, temporal data, and
/// the audience context.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score every achievement and sort descending by priority. The sort is
    /// stable, so equal scores keep their input order.
    pub fn score_all(
        &self,
        achievements: &[Achievement],
        context: &ScoringContext,
        today: NaiveDate,
    ) -> Vec<ScoredAchievement> {
        let mut scored: Vec<ScoredAchievement> = achievements
            .iter()
            .map(|a| self.live_score(a, context, today))
            .collect();
        scored.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));
        scored
    }

    /// The request-time formula: additive boosts on a base score, with one
    /// reasoning entry per triggered rule in application order. The result
    /// is intentionally NOT clamped; compare [`Self::import_score`].
    pub fn live_score(
        &self,
        achievement: &Achievement,
        context: &ScoringContext,
        today: NaiveDate,
    ) -> ScoredAchievement {
        let w = &self.weights;
        let mut score = w.base_score;
        let mut reasoning = Vec::new();

        if achievement.name.to_lowercase().contains("csa") {
            score += w.csa_boost;
            reasoning.push(format!("CSA certification priority boost (+{})", w.csa_boost));
        }

        if days_since(achievement.date_earned, today) <= w.recency_window_days {
            score += w.recency_boost;
            reasoning.push(format!("Recent achievement boost (+{})", w.recency_boost));
        }

        if achievement.kind == AchievementType::Certification {
            score += w.certification_boost;
            reasoning.push(format!(
                "Certification type boost (+{})",
                w.certification_boost
            ));
        }

        if let Some(audience) = context.target_audience {
            let boost = self.audience_boost(achievement, audience);
            score += boost;
            if boost > 0 {
                reasoning.push(format!("Audience targeting boost (+{})", boost));
            }
        }

        if achievement.is_platform_issued() {
            score += w.platform_boost;
            reasoning.push(format!(
                "ServiceNow platform relevance (+{})",
                w.platform_boost
            ));
        }

        if !context.include_reasoning {
            reasoning.clear();
        }

        ScoredAchievement {
            achievement: achievement.clone(),
            priority_score: score,
            reasoning,
            display_weight: DisplayWeight::from_score(score),
            engagement_prediction: predict_engagement(score),
        }
    }

    /// Audience-specific boost. At most one rule applies per audience;
    /// unrecognized audiences boost nothing.
    fn audience_boost(&self, achievement: &Achievement, audience: TargetAudience) -> i64 {
        let w = &self.weights;
        match audience {
            TargetAudience::ItRecruiters => {
                if achievement.name.contains("CSA") || achievement.name.contains("CIS") {
                    w.it_recruiters_boost
                } else {
                    0
                }
            }
            TargetAudience::VeteranCommunity => {
                if achievement.description.to_lowercase().contains("leadership") {
                    w.veteran_community_boost
                } else {
                    0
                }
            }
            TargetAudience::ServicenowProfessionals => {
                if achievement.is_platform_issued() {
                    w.servicenow_professionals_boost
                } else {
                    0
                }
            }
            TargetAudience::General => 0,
        }
    }

    /// The bulk-load formula: keyword-driven additive score, clamped to
    /// `[score_floor, score_cap]`. Deliberately different from
    /// [`Self::live_score`]; both behaviors are load-bearing.
    pub fn import_score(&self, achievement: &Achievement, today: NaiveDate) -> i64 {
        let w = &self.weights;
        let name = achievement.name.to_lowercase();
        let issuer = achievement.issuer.to_lowercase();
        let description = achievement.description.to_lowercase();

        let mut score = w.base_score;

        if name.contains("csa") {
            score += w.csa_boost;
        }

        if SERVICENOW_KEYWORDS
            .iter()
            .any(|k| name.contains(k) || issuer.contains(k))
        {
            score += w.platform_boost;
        }

        if achievement.kind == AchievementType::Certification {
            score += w.certification_boost;
        }

        if days_since(achievement.date_earned, today) <= w.recency_window_days {
            score += w.recency_boost;
        }

        if VETERAN_KEYWORDS
            .iter()
            .any(|k| name.contains(k) || description.contains(k))
        {
            score += w.veteran_keyword_boost;
        }

        score.clamp(w.score_floor, w.score_cap)
    }
}

/// Whole days elapsed since `earned`; [`STALE_DAYS`] when no date is known.
fn days_since(earned: Option<NaiveDate>, today: NaiveDate) -> i64 {
    match earned {
        Some(date) => (today - date).num_days(),
        None => STALE_DAYS,
    }
}
