use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use cadence_domain::shared::{DomainError, TaskId, UserId};
use cadence_domain::task_history::{TaskAction, TaskHistoryEntry, TaskHistoryRepository};

#[derive(FromRow)]
struct TaskHistoryRow {
    id: String,
    user_id: String,
    task_id: String,
    action: String,
    detail: Option<String>,
    recorded_at: DateTime<Utc>,
}

impl TaskHistoryRow {
    fn try_into_entry(self) -> Result<TaskHistoryEntry, DomainError> {
        let action = TaskAction::parse(&self.action)
            .map_err(|_| DomainError::DataIntegrity(format!("Bad task action: {}", self.action)))?;

        Ok(TaskHistoryEntry::restore(
            self.id,
            UserId::from_string(&self.user_id),
            TaskId::from_string(&self.task_id),
            action,
            self.detail,
            self.recorded_at,
        ))
    }
}

pub struct SqliteTaskHistoryRepository {
    base: SqliteRepositoryBase,
}

impl SqliteTaskHistoryRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl TaskHistoryRepository for SqliteTaskHistoryRepository {
    async fn append(&self, entry: &TaskHistoryEntry) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO task_history (
                id,
                user_id,
                task_id,
                action,
                detail,
                recorded_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(entry.id())
                    .bind(entry.user_id().as_str())
                    .bind(entry.task_id().as_str())
                    .bind(entry.action().as_str())
                    .bind(entry.detail())
                    .bind(entry.recorded_at()),
                "Append task history",
            )
            .await?;

        Ok(())
    }

    async fn list_for_task(
        &self,
        user_id: &UserId,
        task_id: &TaskId,
    ) -> Result<Vec<TaskHistoryEntry>, DomainError> {
        let query = r#"
            SELECT id, user_id, task_id, action, detail, recorded_at
            FROM task_history
            WHERE user_id = ?1 AND task_id = ?2
            ORDER BY recorded_at
        "#;

        let rows: Vec<TaskHistoryRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query)
                    .bind(user_id.as_str())
                    .bind(task_id.as_str()),
                "List task history",
            )
            .await?;

        rows.into_iter().map(TaskHistoryRow::try_into_entry).collect()
    }
}
