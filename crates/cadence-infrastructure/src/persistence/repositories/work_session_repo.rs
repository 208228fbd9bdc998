use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use cadence_domain::shared::{DomainError, TaskId, UserId, WorkSessionId};
use cadence_domain::work_session::{WorkSession, WorkSessionRepository};

#[derive(FromRow)]
struct WorkSessionRow {
    id: String,
    user_id: String,
    task_id: Option<String>,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    duration_seconds: Option<i64>,
    note: Option<String>,
}

impl WorkSessionRow {
    fn into_session(self) -> WorkSession {
        WorkSession::restore(
            WorkSessionId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            self.task_id.map(|t| TaskId::from_string(&t)),
            self.started_at,
            self.ended_at,
            self.duration_seconds,
            self.note,
        )
    }
}

pub struct SqliteWorkSessionRepository {
    base: SqliteRepositoryBase,
}

impl SqliteWorkSessionRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl WorkSessionRepository for SqliteWorkSessionRepository {
    async fn save(&self, session: &WorkSession) -> Result<(), DomainError> {
        let query = r#"
            INSERT OR REPLACE INTO work_sessions (
                id,
                user_id,
                task_id,
                started_at,
                ended_at,
                duration_seconds,
                note
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(session.id().as_str())
                    .bind(session.user_id().as_str())
                    .bind(session.task_id().map(|t| t.as_str()))
                    .bind(session.started_at())
                    .bind(session.ended_at())
                    .bind(session.duration_seconds())
                    .bind(session.note()),
                "Save work session",
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        user_id: &UserId,
        id: &WorkSessionId,
    ) -> Result<Option<WorkSession>, DomainError> {
        let query = r#"
            SELECT id, user_id, task_id, started_at, ended_at, duration_seconds, note
            FROM work_sessions
            WHERE user_id = ?1 AND id = ?2
        "#;

        let row: Option<WorkSessionRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query)
                    .bind(user_id.as_str())
                    .bind(id.as_str()),
                "Find work session by id",
            )
            .await?;

        Ok(row.map(WorkSessionRow::into_session))
    }

    async fn find_by_user_id(
        &self,
        user_id: &UserId,
        task_id: Option<&TaskId>,
    ) -> Result<Vec<WorkSession>, DomainError> {
        let rows: Vec<WorkSessionRow> = match task_id {
            Some(task_id) => {
                let query = r#"
                    SELECT id, user_id, task_id, started_at, ended_at, duration_seconds, note
                    FROM work_sessions
                    WHERE user_id = ?1 AND task_id = ?2
                    ORDER BY started_at DESC
                "#;
                self.base
                    .fetch_all(
                        sqlx::query_as(query)
                            .bind(user_id.as_str())
                            .bind(task_id.as_str()),
                        "Find work sessions by task",
                    )
                    .await?
            }
            None => {
                let query = r#"
                    SELECT id, user_id, task_id, started_at, ended_at, duration_seconds, note
                    FROM work_sessions
                    WHERE user_id = ?1
                    ORDER BY started_at DESC
                "#;
                self.base
                    .fetch_all(
                        sqlx::query_as(query).bind(user_id.as_str()),
                        "Find work sessions by user id",
                    )
                    .await?
            }
        };

        Ok(rows.into_iter().map(WorkSessionRow::into_session).collect())
    }
}
