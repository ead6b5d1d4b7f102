//! Deterministic fallback content templates
//!
//! Used whenever the AI backend is unavailable or fails. Templates are
//! selected by category family and always reference the achievement name
//! verbatim. Confidences are fixed per variant, not measured.

use super::types::{ContentSuggestion, ContentType};
use crate::achievement::Achievement;

/// Template family an achievement's category maps into. Unrecognized
/// categories use the platform family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CategoryFamily {
    ServiceNow,
    Military,
    Certification,
    Community,
}

impl CategoryFamily {
    pub(crate) fn for_category(category: &str) -> Self {
        let c = category.to_lowercase();
        if c.contains("milit")
            || c.contains("navy")
            || c.contains("leadership")
            || c.contains("service excellence")
        {
            Self::Military
        } else if c.contains("community") || c.contains("advocacy") || c.contains("mentor") {
            Self::Community
        } else if c.contains("cert")
            || c.contains("security")
            || c.contains("cloud")
            || c.contains("project management")
        {
            Self::Certification
        } else {
            Self::ServiceNow
        }
    }

    fn hashtags(&self) -> &'static str {
        match self {
            Self::ServiceNow => "#ServiceNow #VeteranInTech #ProfessionalDevelopment",
            Self::Military => "#ServiceToSuccess #VeteranInnovation #MissionDriven",
            Self::Certification => "#ContinuousLearning #VeteranInTech #Certified",
            Self::Community => "#VeteranMentorship #CommunityImpact #ServiceToSuccess",
        }
    }
}

/// Generate fallback suggestions for one achievement and content type.
/// Always returns three styled variants.
pub(crate) fn fallback_suggestions(
    achievement: &Achievement,
    content_type: ContentType,
) -> Vec<ContentSuggestion> {
    match content_type {
        ContentType::LinkedinPost => linkedin_posts(achievement),
        ContentType::BadgeDescription => badge_descriptions(achievement),
        ContentType::ProfessionalSummary => professional_summaries(achievement),
    }
}

fn linkedin_posts(achievement: &Achievement) -> Vec<ContentSuggestion> {
    let family = CategoryFamily::for_category(&achievement.category);
    let name = &achievement.name;
    let tags = family.hashtags();

    vec![
        ContentSuggestion {
            content: format!(
                "🎖️ Proud to earn my {name}! This achievement represents the same dedication \
                 to excellence I brought to military service, now applied to advancing platform \
                 expertise. {tags}"
            ),
            confidence: 0.85,
            veteran_aligned: true,
            style: "professional_achievement".into(),
        },
        ContentSuggestion {
            content: format!(
                "🚀 Mission accomplished! Just earned my {name}. The same mission-focused \
                 approach that drove success in military service now powers innovation in \
                 enterprise technology. Veterans: our discipline and problem-solving skills are \
                 exactly what the tech industry needs. {tags}"
            ),
            confidence: 0.82,
            veteran_aligned: true,
            style: "service_to_success".into(),
        },
        ContentSuggestion {
            content: format!(
                "💡 Leadership through expertise: proud to achieve {name}. Military service \
                 taught me that true leadership means continuous learning and helping others \
                 succeed, a principle I now apply to mentoring veterans moving into tech \
                 careers. {tags}"
            ),
            confidence: 0.88,
            veteran_aligned: true,
            style: "technical_leadership".into(),
        },
    ]
}

fn badge_descriptions(achievement: &Achievement) -> Vec<ContentSuggestion> {
    let name = &achievement.name;

    vec![
        ContentSuggestion {
            content: format!(
                "The {name} achievement demonstrates advanced technical proficiency. It \
                 validates the systematic, detail-oriented approach developed through military \
                 service, applied to enterprise technology solutions."
            ),
            confidence: 0.84,
            veteran_aligned: true,
            style: "technical_focus".into(),
        },
        ContentSuggestion {
            content: format!(
                "Earning {name} reflects leadership principles and a commitment to excellence \
                 instilled through military service: driving technical initiatives, mentoring \
                 team members, and delivering results under pressure."
            ),
            confidence: 0.87,
            veteran_aligned: true,
            style: "leadership_focus".into(),
        },
        ContentSuggestion {
            content: format!(
                "The {name} achievement represents measurable impact in platform optimization \
                 and business process improvement, grounded in military-trained discipline in \
                 planning and execution."
            ),
            confidence: 0.83,
            veteran_aligned: true,
            style: "business_impact".into(),
        },
    ]
}

fn professional_summaries(achievement: &Achievement) -> Vec<ContentSuggestion> {
    let name = &achievement.name;
    let category = if achievement.category.is_empty() {
        "platform"
    } else {
        &achievement.category
    };

    vec![
        ContentSuggestion {
            content: format!(
                "Technology professional with a military background bringing {category} \
                 expertise and leadership excellence. The {name} achievement demonstrates \
                 advanced proficiency, reflecting the discipline and attention to detail \
                 developed through military service."
            ),
            confidence: 0.86,
            veteran_aligned: true,
            style: "professional_achievement".into(),
        },
        ContentSuggestion {
            content: format!(
                "Accomplished {name} holder focused on mission success and team excellence, \
                 translating military leadership into technology delivery."
            ),
            confidence: 0.82,
            veteran_aligned: true,
            style: "service_to_success".into(),
        },
        ContentSuggestion {
            content: format!(
                "Veteran technologist combining {category} depth with a track record of \
                 mentorship; {name} marks continued investment in technical leadership."
            ),
            confidence: 0.84,
            veteran_aligned: true,
            style: "technical_leadership".into(),
        },
    ]
}
