use async_trait::async_trait;

use super::WorkSession;
use crate::shared::{DomainError, TaskId, UserId, WorkSessionId};

#[async_trait]
pub trait WorkSessionRepository: Send + Sync {
    /// Save (upsert) a session.
    async fn save(&self, session: &WorkSession) -> Result<(), DomainError>;

    async fn find_by_id(
        &self,
        user_id: &UserId,
        id: &WorkSessionId,
    ) -> Result<Option<WorkSession>, DomainError>;

    /// List a user's sessions, newest first, optionally filtered by task.
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
        task_id: Option<&TaskId>,
    ) -> Result<Vec<WorkSession>, DomainError>;
}
