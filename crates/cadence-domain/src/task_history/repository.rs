use async_trait::async_trait;

use super::TaskHistoryEntry;
use crate::shared::{DomainError, TaskId, UserId};

#[async_trait]
pub trait TaskHistoryRepository: Send + Sync {
    /// Append a history entry. History is never updated or deleted ahead of
    /// its task; deleting a task keeps its trail.
    async fn append(&self, entry: &TaskHistoryEntry) -> Result<(), DomainError>;

    /// List entries for one task, oldest first.
    async fn list_for_task(
        &self,
        user_id: &UserId,
        task_id: &TaskId,
    ) -> Result<Vec<TaskHistoryEntry>, DomainError>;
}
