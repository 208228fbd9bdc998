use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use cadence_domain::shared::DomainError;

type SqliteQuery<'q> = sqlx::query::Query<'q, sqlx::Sqlite, SqliteArguments<'q>>;
type SqliteQueryAs<'q, T> = sqlx::query::QueryAs<'q, sqlx::Sqlite, T, SqliteArguments<'q>>;

/// Shared plumbing for the SQLite repositories: pool access plus error
/// mapping with a human-readable operation label.
pub struct SqliteRepositoryBase {
    pool: Arc<SqlitePool>,
}

impl SqliteRepositoryBase {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn execute(&self, query: SqliteQuery<'_>, context: &str) -> Result<u64, DomainError> {
        let result = query
            .execute(&*self.pool)
            .await
            .map_err(|e| DomainError::Repository(format!("{}: {}", context, e)))?;
        Ok(result.rows_affected())
    }

    pub async fn fetch_optional<T>(
        &self,
        query: SqliteQueryAs<'_, T>,
        context: &str,
    ) -> Result<Option<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        query
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| DomainError::Repository(format!("{}: {}", context, e)))
    }

    pub async fn fetch_all<T>(
        &self,
        query: SqliteQueryAs<'_, T>,
        context: &str,
    ) -> Result<Vec<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        query
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| DomainError::Repository(format!("{}: {}", context, e)))
    }
}
