use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use cadence_domain::shared::{DomainError, TaskId, UserId};
use cadence_domain::task::{Task, TaskPriority, TaskRepository, TaskStatus};

#[derive(FromRow)]
struct TaskRow {
    id: String,
    user_id: String,
    title: String,
    description: Option<String>,
    status: String,
    priority: String,
    due_date: Option<NaiveDate>,
    due_time: Option<NaiveTime>,
    parent_task_id: Option<String>,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TaskRow {
    fn try_into_task(self) -> Result<Task, DomainError> {
        let status = TaskStatus::parse(&self.status)
            .map_err(|_| DomainError::DataIntegrity(format!("Bad task status: {}", self.status)))?;
        let priority = TaskPriority::parse(&self.priority).map_err(|_| {
            DomainError::DataIntegrity(format!("Bad task priority: {}", self.priority))
        })?;

        Ok(Task::restore(
            TaskId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            self.title,
            self.description,
            status,
            priority,
            self.due_date,
            self.due_time,
            self.parent_task_id.map(|p| TaskId::from_string(&p)),
            self.completed_at,
            self.created_at,
            self.updated_at,
        ))
    }
}

const TASK_COLUMNS: &str = r#"
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
    updated_at
"#;

pub struct SqliteTaskRepository {
    base: SqliteRepositoryBase,
}

impl SqliteTaskRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn save(&self, task: &Task) -> Result<(), DomainError> {
        let query = r#"
            INSERT OR REPLACE INTO tasks (
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
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(task.id().as_str())
                    .bind(task.user_id().as_str())
                    .bind(task.title())
                    .bind(task.description())
                    .bind(task.status().as_str())
                    .bind(task.priority().as_str())
                    .bind(task.due_date())
                    .bind(task.due_time())
                    .bind(task.parent_task_id().map(|p| p.as_str()))
                    .bind(task.completed_at())
                    .bind(task.created_at())
                    .bind(task.updated_at()),
                "Save task",
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        user_id: &UserId,
        id: &TaskId,
    ) -> Result<Option<Task>, DomainError> {
        let query = format!(
            "SELECT {} FROM tasks WHERE user_id = ?1 AND id = ?2",
            TASK_COLUMNS
        );

        let row: Option<TaskRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query)
                    .bind(user_id.as_str())
                    .bind(id.as_str()),
                "Find task by id",
            )
            .await?;

        row.map(TaskRow::try_into_task).transpose()
    }

    async fn find_by_user_id(
        &self,
        user_id: &UserId,
        status: Option<TaskStatus>,
    ) -> Result<Vec<Task>, DomainError> {
        let rows: Vec<TaskRow> = match status {
            Some(status) => {
                let query = format!(
                    "SELECT {} FROM tasks WHERE user_id = ?1 AND status = ?2 ORDER BY created_at DESC",
                    TASK_COLUMNS
                );
                self.base
                    .fetch_all(
                        sqlx::query_as(&query)
                            .bind(user_id.as_str())
                            .bind(status.as_str()),
                        "Find tasks by status",
                    )
                    .await?
            }
            None => {
                let query = format!(
                    "SELECT {} FROM tasks WHERE user_id = ?1 ORDER BY created_at DESC",
                    TASK_COLUMNS
                );
                self.base
                    .fetch_all(
                        sqlx::query_as(&query).bind(user_id.as_str()),
                        "Find tasks by user id",
                    )
                    .await?
            }
        };

        rows.into_iter().map(TaskRow::try_into_task).collect()
    }

    async fn find_subtasks(
        &self,
        user_id: &UserId,
        parent_task_id: &TaskId,
    ) -> Result<Vec<Task>, DomainError> {
        let query = format!(
            "SELECT {} FROM tasks WHERE user_id = ?1 AND parent_task_id = ?2 ORDER BY created_at",
            TASK_COLUMNS
        );

        let rows: Vec<TaskRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query)
                    .bind(user_id.as_str())
                    .bind(parent_task_id.as_str()),
                "Find subtasks",
            )
            .await?;

        rows.into_iter().map(TaskRow::try_into_task).collect()
    }

    async fn delete(&self, user_id: &UserId, id: &TaskId) -> Result<u64, DomainError> {
        // Subtasks go with their parent; one level deep so no recursion needed.
        let query = r#"
            DELETE FROM tasks
            WHERE user_id = ?1 AND (id = ?2 OR parent_task_id = ?2)
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(user_id.as_str())
                    .bind(id.as_str()),
                "Delete task",
            )
            .await
    }
}
