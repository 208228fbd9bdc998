use serde::{Deserialize, Serialize};

use cadence_domain::task::Task;
use cadence_domain::task_history::TaskHistoryEntry;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<String>, // YYYY-MM-DD
    pub due_time: Option<String>, // HH:MM or HH:MM:SS
    pub parent_task_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<String>,
    pub due_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChangeTaskStatusRequest {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub due_date: Option<String>,
    pub due_time: Option<String>,
    pub parent_task_id: Option<String>,
    pub completed_at: Option<String>, // RFC 3339
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Task> for TaskDto {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            title: task.title().to_string(),
            description: task.description().map(str::to_string),
            status: task.status().to_string(),
            priority: task.priority().to_string(),
            due_date: task.due_date().map(|d| d.to_string()),
            due_time: task.due_time().map(|t| t.to_string()),
            parent_task_id: task.parent_task_id().map(|p| p.to_string()),
            completed_at: task.completed_at().map(|t| t.to_rfc3339()),
            created_at: task.created_at().to_rfc3339(),
            updated_at: task.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskHistoryEntryDto {
    pub id: String,
    pub task_id: String,
    pub action: String,
    pub detail: Option<String>,
    pub recorded_at: String,
}

impl From<&TaskHistoryEntry> for TaskHistoryEntryDto {
    fn from(entry: &TaskHistoryEntry) -> Self {
        Self {
            id: entry.id().to_string(),
            task_id: entry.task_id().to_string(),
            action: entry.action().as_str().to_string(),
            detail: entry.detail().map(str::to_string),
            recorded_at: entry.recorded_at().to_rfc3339(),
        }
    }
}
