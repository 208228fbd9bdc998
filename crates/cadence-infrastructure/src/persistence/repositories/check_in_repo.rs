use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use cadence_domain::check_in::{CheckIn, CheckInRepository, EnergyLevel, Mood};
use cadence_domain::shared::{CheckInId, DomainError, UserId};

#[derive(FromRow)]
struct CheckInRow {
    id: String,
    user_id: String,
    mood: Option<String>,
    energy_level: Option<i64>,
    note: Option<String>,
    created_at: DateTime<Utc>,
}

impl CheckInRow {
    fn try_into_check_in(self) -> Result<CheckIn, DomainError> {
        let mood = self
            .mood
            .as_deref()
            .map(Mood::parse)
            .transpose()
            .map_err(|e| DomainError::DataIntegrity(e.to_string()))?;
        let energy_level = self
            .energy_level
            .map(|v| EnergyLevel::new(v.clamp(0, u8::MAX as i64) as u8))
            .transpose()
            .map_err(|e| DomainError::DataIntegrity(e.to_string()))?;

        Ok(CheckIn::restore(
            CheckInId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            mood,
            energy_level,
            self.note,
            self.created_at,
        ))
    }
}

pub struct SqliteCheckInRepository {
    base: SqliteRepositoryBase,
}

impl SqliteCheckInRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl CheckInRepository for SqliteCheckInRepository {
    async fn insert(&self, check_in: &CheckIn) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO check_ins (
                id,
                user_id,
                mood,
                energy_level,
                note,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(check_in.id().as_str())
                    .bind(check_in.user_id().as_str())
                    .bind(check_in.mood().map(|m| m.as_str()))
                    .bind(check_in.energy_level().map(|e| e.value() as i64))
                    .bind(check_in.note())
                    .bind(check_in.created_at()),
                "Insert check-in",
            )
            .await?;

        Ok(())
    }

    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<CheckIn>, DomainError> {
        let query = r#"
            SELECT id, user_id, mood, energy_level, note, created_at
            FROM check_ins
            WHERE user_id = ?1
            ORDER BY created_at DESC
            LIMIT ?2
        "#;

        let rows: Vec<CheckInRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query)
                    .bind(user_id.as_str())
                    .bind(limit as i64),
                "List recent check-ins",
            )
            .await?;

        rows.into_iter().map(CheckInRow::try_into_check_in).collect()
    }

    async fn list_in_date_range(
        &self,
        user_id: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CheckIn>, DomainError> {
        let query = r#"
            SELECT id, user_id, mood, energy_level, note, created_at
            FROM check_ins
            WHERE user_id = ?1
              AND date(created_at) >= ?2
              AND date(created_at) <= ?3
            ORDER BY created_at
        "#;

        let rows: Vec<CheckInRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query)
                    .bind(user_id.as_str())
                    .bind(start)
                    .bind(end),
                "List check-ins in date range",
            )
            .await?;

        rows.into_iter().map(CheckInRow::try_into_check_in).collect()
    }
}
