use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, TaskId, UserId, WorkSessionId};

/// A timed work session, optionally attached to a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkSession {
    id: WorkSessionId,
    user_id: UserId,
    task_id: Option<TaskId>,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    duration_seconds: Option<i64>,
    note: Option<String>,
}

impl WorkSession {
    pub fn start(user_id: UserId, task_id: Option<TaskId>, note: Option<String>) -> Self {
        Self {
            id: WorkSessionId::new(),
            user_id,
            task_id,
            started_at: Utc::now(),
            ended_at: None,
            duration_seconds: None,
            note: note.filter(|n| !n.trim().is_empty()),
        }
    }

    pub fn restore(
        id: WorkSessionId,
        user_id: UserId,
        task_id: Option<TaskId>,
        started_at: DateTime<Utc>,
        ended_at: Option<DateTime<Utc>>,
        duration_seconds: Option<i64>,
        note: Option<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            task_id,
            started_at,
            ended_at,
            duration_seconds,
            note,
        }
    }

    pub fn id(&self) -> &WorkSessionId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn task_id(&self) -> Option<&TaskId> {
        self.task_id.as_ref()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    pub fn duration_seconds(&self) -> Option<i64> {
        self.duration_seconds
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn is_running(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Stop the session at `now`. Duration is clamped at zero for clock skew.
    pub fn stop(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        if self.ended_at.is_some() {
            return Err(DomainError::SessionAlreadyStopped(format!(
                "Session {} has already ended",
                self.id
            )));
        }
        self.ended_at = Some(now);
        self.duration_seconds = Some((now - self.started_at).num_seconds().max(0));
        Ok(())
    }
}
