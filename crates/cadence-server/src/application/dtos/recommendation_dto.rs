use serde::{Deserialize, Serialize};

use cadence_domain::recommendation::{RecommendationSet, RecommendedTask};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedTaskDto {
    pub task_id: String,
    pub suggested_date: String, // YYYY-MM-DD
    pub suggested_time: Option<String>,
    pub reasoning: String,
    pub confidence: f64,
    pub priority: Option<String>,
}

impl From<&RecommendedTask> for RecommendedTaskDto {
    fn from(r: &RecommendedTask) -> Self {
        Self {
            task_id: r.task_id.clone(),
            suggested_date: r.suggested_date.to_string(),
            suggested_time: r.suggested_time.map(|t| t.to_string()),
            reasoning: r.reasoning.clone(),
            confidence: r.confidence,
            priority: r.priority.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSetDto {
    pub recommended_tasks: Vec<RecommendedTaskDto>,
    pub insights: Vec<String>,
    pub warnings: Vec<String>,
    /// Set when the requester failed and the result degraded to empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded_reason: Option<String>,
}

impl RecommendationSetDto {
    pub fn from_set(set: &RecommendationSet, degraded_reason: Option<String>) -> Self {
        Self {
            recommended_tasks: set.recommended_tasks.iter().map(Into::into).collect(),
            insights: set.insights.clone(),
            warnings: set.warnings.clone(),
            degraded_reason,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AcceptRecommendationRequest {
    pub task_id: String,
    pub due_date: String, // YYYY-MM-DD
    pub due_time: Option<String>,
}
