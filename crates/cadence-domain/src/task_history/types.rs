use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::{DomainError, TaskId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAction {
    Created,
    Updated,
    StatusChanged,
    Rescheduled,
    Deleted,
}

impl TaskAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskAction::Created => "created",
            TaskAction::Updated => "updated",
            TaskAction::StatusChanged => "status_changed",
            TaskAction::Rescheduled => "rescheduled",
            TaskAction::Deleted => "deleted",
        }
    }

    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "created" => Ok(TaskAction::Created),
            "updated" => Ok(TaskAction::Updated),
            "status_changed" => Ok(TaskAction::StatusChanged),
            "rescheduled" => Ok(TaskAction::Rescheduled),
            "deleted" => Ok(TaskAction::Deleted),
            other => Err(DomainError::InvalidInput(format!(
                "Unknown task action: {}",
                other
            ))),
        }
    }
}

/// Append-only audit row recorded on every task mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskHistoryEntry {
    id: String,
    user_id: UserId,
    task_id: TaskId,
    action: TaskAction,
    detail: Option<String>,
    recorded_at: DateTime<Utc>,
}

impl TaskHistoryEntry {
    pub fn new(
        user_id: UserId,
        task_id: TaskId,
        action: TaskAction,
        detail: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            task_id,
            action,
            detail,
            recorded_at: Utc::now(),
        }
    }

    pub fn restore(
        id: String,
        user_id: UserId,
        task_id: TaskId,
        action: TaskAction,
        detail: Option<String>,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            task_id,
            action,
            detail,
            recorded_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    pub fn action(&self) -> TaskAction {
        self.action
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
