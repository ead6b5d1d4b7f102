//! AI backend client
//!
//! Talks to the achievement-analysis endpoint with a bounded request. Every
//! failure mode is a distinct [`AiCallError`] variant so the caller decides
//! what "unavailable" means; the generator treats them all as a cue to fall
//! back to templates.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::achievement::Achievement;
use crate::config::AiConfig;
use crate::scoring::TargetAudience;

/// Errors from an AI backend call.
#[derive(Error, Debug)]
pub enum AiCallError {
    #[error("AI request timed out after {0} ms")]
    Timeout(u64),

    #[error("AI backend returned status {status}")]
    Http { status: u16 },

    #[error("AI backend returned a malformed response: {0}")]
    InvalidResponse(String),

    #[error("AI request failed: {0}")]
    Request(String),
}

/// Analysis returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct AiAnalysis {
    pub linkedin_post: String,
    pub summary: String,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

fn default_confidence() -> f64 {
    0.85
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    badge: BadgePayload<'a>,
    context: AnalyzeContext,
}

#[derive(Debug, Serialize)]
struct BadgePayload<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    issuer: &'a str,
    description: &'a str,
    category: &'a str,
}

#[derive(Debug, Serialize)]
struct AnalyzeContext {
    target_audience: &'static str,
    veteran_narrative: bool,
}

/// Client for the achievement-analysis backend.
pub struct AiClient {
    base_url: String,
    api_key: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl AiClient {
    pub fn new(config: &AiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The AI path is enabled only when a credential is configured.
    pub fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Analyze one achievement for the given audience.
    pub async fn analyze_achievement(
        &self,
        achievement: &Achievement,
        audience: TargetAudience,
    ) -> Result<AiAnalysis, AiCallError> {
        let url = format!("{}/analyze-achievement", self.base_url);

        let payload = AnalyzeRequest {
            badge: BadgePayload {
                name: &achievement.name,
                kind: achievement.kind.as_str(),
                issuer: &achievement.issuer,
                description: &achievement.description,
                category: &achievement.category,
            },
            context: AnalyzeContext {
                target_audience: audience.as_str(),
                veteran_narrative: true,
            },
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiCallError::Timeout(self.timeout.as_millis() as u64)
                } else {
                    AiCallError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AiCallError::Http {
                status: status.as_u16(),
            });
        }

        response
            .json::<AiAnalysis>()
            .await
            .map_err(|e| AiCallError::InvalidResponse(e.to_string()))
    }
}
