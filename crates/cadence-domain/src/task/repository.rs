use async_trait::async_trait;

use super::{Task, TaskStatus};
use crate::shared::{DomainError, TaskId, UserId};

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Save (upsert) a task.
    async fn save(&self, task: &Task) -> Result<(), DomainError>;

    /// Find a task by id, scoped to its owner. Another user's task id
    /// resolves to `None`.
    async fn find_by_id(&self, user_id: &UserId, id: &TaskId)
        -> Result<Option<Task>, DomainError>;

    /// List a user's tasks, newest first, optionally filtered by status.
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
        status: Option<TaskStatus>,
    ) -> Result<Vec<Task>, DomainError>;

    /// List subtasks of a parent task.
    async fn find_subtasks(
        &self,
        user_id: &UserId,
        parent_task_id: &TaskId,
    ) -> Result<Vec<Task>, DomainError>;

    /// Delete a task and its subtasks. Returns the number of rows removed.
    async fn delete(&self, user_id: &UserId, id: &TaskId) -> Result<u64, DomainError>;
}
