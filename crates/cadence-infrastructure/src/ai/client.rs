use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use cadence_domain::recommendation::{
    RecommendationClient, RecommendationSet, RecommendationSnapshot,
};
use cadence_domain::shared::DomainError;

const DEFAULT_TIMEOUT_SECS: u64 = 60;

const SYSTEM_PROMPT: &str = "You are a scheduling assistant. Given a user's open tasks, \
work hours and recent mood/energy check-ins, suggest when to work on which task. \
Respond with a single JSON object of the shape \
{\"recommendedTasks\":[{\"taskId\":\"...\",\"suggestedDate\":\"YYYY-MM-DD\",\
\"suggestedTime\":\"HH:MM:SS\",\"reasoning\":\"...\",\"confidence\":0.0,\"priority\":\"...\"}],\
\"insights\":[],\"warnings\":[]}. Only reference task ids that appear in the input. \
Do not wrap the JSON in markdown fences or add prose.";

#[derive(Debug, Clone)]
pub struct AiClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl AiClientConfig {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            base_url,
            api_key,
            model,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Recommendation client talking to an OpenAI-compatible chat completions
/// endpoint. The model is asked for the canonical recommendation JSON and
/// the reply is validated against the snapshot's task ids.
pub struct OpenAiRecommendationClient {
    config: AiClientConfig,
    client: reqwest::Client,
}

impl OpenAiRecommendationClient {
    pub fn new(config: AiClientConfig) -> Result<Self, DomainError> {
        url::Url::parse(&config.base_url).map_err(|e| {
            DomainError::Validation(format!("Invalid AI base URL {}: {}", config.base_url, e))
        })?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                DomainError::Infrastructure(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn build_request(&self, snapshot: &RecommendationSnapshot) -> Result<ChatRequest, DomainError> {
        let snapshot_json = serde_json::to_string(snapshot)
            .map_err(|e| DomainError::Serialization(e.to_string()))?;

        Ok(ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: snapshot_json,
                },
            ],
            temperature: 0.2,
        })
    }

    fn map_status(status: reqwest::StatusCode, body: &str) -> DomainError {
        match status.as_u16() {
            401 | 403 => DomainError::AiAuthRequired(format!("HTTP {}: {}", status, body)),
            402 | 429 => DomainError::AiQuotaExceeded(format!("HTTP {}: {}", status, body)),
            _ => DomainError::RecommendationFailed(format!("HTTP {}: {}", status, body)),
        }
    }
}

/// Parse a model reply into a recommendation set. Tolerates replies wrapped
/// in markdown code fences despite the prompt asking for bare JSON.
fn parse_reply(content: &str) -> Result<RecommendationSet, DomainError> {
    let trimmed = content.trim();
    let json = strip_code_fence(trimmed);

    serde_json::from_str(json).map_err(|e| {
        DomainError::RecommendationFailed(format!("Unparseable model reply: {}", e))
    })
}

fn strip_code_fence(s: &str) -> &str {
    let Some(rest) = s.strip_prefix("```") else {
        return s;
    };
    // Drop the optional language tag on the fence line.
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

/// Drop suggestions for task ids the snapshot never mentioned, with a
/// warning so callers can see the model hallucinated.
fn validate_against_snapshot(
    mut set: RecommendationSet,
    snapshot: &RecommendationSnapshot,
) -> RecommendationSet {
    let known: std::collections::HashSet<&str> =
        snapshot.tasks.iter().map(|t| t.task_id.as_str()).collect();

    let before = set.recommended_tasks.len();
    set.recommended_tasks
        .retain(|r| known.contains(r.task_id.as_str()));
    let dropped = before - set.recommended_tasks.len();

    if dropped > 0 {
        set.warnings.push(format!(
            "{} suggestion(s) referenced unknown tasks and were ignored",
            dropped
        ));
    }

    for r in &mut set.recommended_tasks {
        r.confidence = r.confidence.clamp(0.0, 1.0);
    }

    set
}

#[async_trait]
impl RecommendationClient for OpenAiRecommendationClient {
    async fn recommend(
        &self,
        snapshot: &RecommendationSnapshot,
    ) -> Result<RecommendationSet, DomainError> {
        let request = self.build_request(snapshot)?;

        tracing::debug!(
            target: "cadence::ai",
            model = %self.config.model,
            tasks = snapshot.tasks.len(),
            check_ins = snapshot.recent_check_ins.len(),
            "Requesting schedule recommendations"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::RecommendationFailed(format!("AI request timed out: {}", e))
                } else {
                    DomainError::Infrastructure(format!("AI request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_status(status, &body));
        }

        let chat: ChatResponse = response.json().await.map_err(|e| {
            DomainError::RecommendationFailed(format!("Malformed completions response: {}", e))
        })?;

        let content = chat
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| {
                DomainError::RecommendationFailed("Completions response had no choices".to_string())
            })?;

        let set = parse_reply(content)?;
        Ok(validate_against_snapshot(set, snapshot))
    }
}
