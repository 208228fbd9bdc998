use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Flattened task view shipped to the AI endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSnapshot {
    pub task_id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInSnapshot {
    pub mood: Option<String>,
    pub energy_level: Option<u8>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkHoursSnapshot {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub utc_offset_minutes: i32,
}

/// Everything the recommendation requester sends: active tasks, the
/// work-hours profile, and the last N check-ins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSnapshot {
    pub user_id: String,
    pub tasks: Vec<TaskSnapshot>,
    pub work_hours: WorkHoursSnapshot,
    pub recent_check_ins: Vec<CheckInSnapshot>,
}

/// One AI scheduling suggestion for an existing task. Advisory; applied only
/// when the user explicitly accepts it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedTask {
    pub task_id: String,
    pub suggested_date: NaiveDate,
    pub suggested_time: Option<NaiveTime>,
    pub reasoning: String,
    /// 0.0 - 1.0
    pub confidence: f64,
    pub priority: Option<String>,
}

/// Canonical response shape: `recommendedTasks` / `insights` / `warnings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    pub recommended_tasks: Vec<RecommendedTask>,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl RecommendationSet {
    /// The degraded "no recommendations" result used on requester failure.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.recommended_tasks.is_empty() && self.insights.is_empty() && self.warnings.is_empty()
    }
}
