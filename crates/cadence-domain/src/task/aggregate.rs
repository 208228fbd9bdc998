use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{TaskPriority, TaskStatus};
use crate::shared::{DomainError, TaskId, UserId};

/// Input for creating a task. Subtasks pass `parent_task_id`; nesting stops
/// at one level (a subtask cannot itself have children).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
    pub parent_task_id: Option<TaskId>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    user_id: UserId,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<NaiveDate>,
    due_time: Option<NaiveTime>,
    parent_task_id: Option<TaskId>,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(user_id: UserId, draft: TaskDraft) -> Result<Self, DomainError> {
        if draft.title.trim().is_empty() {
            return Err(DomainError::Validation(
                "Task title cannot be empty".to_string(),
            ));
        }

        let now = Utc::now();
        Ok(Self {
            id: TaskId::new(),
            user_id,
            title: draft.title.trim().to_string(),
            description: draft.description.filter(|d| !d.trim().is_empty()),
            status: TaskStatus::Todo,
            priority: draft.priority.unwrap_or_default(),
            due_date: draft.due_date,
            due_time: draft.due_time,
            parent_task_id: draft.parent_task_id,
            completed_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: TaskId,
        user_id: UserId,
        title: String,
        description: Option<String>,
        status: TaskStatus,
        priority: TaskPriority,
        due_date: Option<NaiveDate>,
        due_time: Option<NaiveTime>,
        parent_task_id: Option<TaskId>,
        completed_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            description,
            status,
            priority,
            due_date,
            due_time,
            parent_task_id,
            completed_at,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn priority(&self) -> TaskPriority {
        self.priority
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn due_time(&self) -> Option<NaiveTime> {
        self.due_time
    }

    pub fn parent_task_id(&self) -> Option<&TaskId> {
        self.parent_task_id.as_ref()
    }

    pub fn is_subtask(&self) -> bool {
        self.parent_task_id.is_some()
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn apply_update(&mut self, update: TaskUpdate) -> Result<(), DomainError> {
        if let Some(title) = update.title {
            if title.trim().is_empty() {
                return Err(DomainError::Validation(
                    "Task title cannot be empty".to_string(),
                ));
            }
            self.title = title.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = Some(description).filter(|d| !d.trim().is_empty());
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = Some(due_date);
        }
        if let Some(due_time) = update.due_time {
            self.due_time = Some(due_time);
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn change_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.completed_at = match status {
            TaskStatus::Done => Some(Utc::now()),
            _ => None,
        };
        self.updated_at = Utc::now();
    }

    /// Reschedule after an accepted recommendation. A plain due-date update;
    /// nothing else about the task changes.
    pub fn reschedule(&mut self, due_date: NaiveDate, due_time: Option<NaiveTime>) {
        self.due_date = Some(due_date);
        self.due_time = due_time;
        self.updated_at = Utc::now();
    }
}
