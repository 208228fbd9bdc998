use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use cadence_domain::profile::{Profile, ProfileRepository, WorkHours};
use cadence_domain::shared::{DomainError, UserId};

#[derive(FromRow)]
struct ProfileRow {
    user_id: String,
    display_name: String,
    current_streak: i64,
    longest_streak: i64,
    last_check_in_date: Option<NaiveDate>,
    work_start: NaiveTime,
    work_end: NaiveTime,
    check_in_frequency: i64,
    utc_offset_minutes: i64,
    reminders_enabled: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_profile(self) -> Profile {
        Profile::restore(
            UserId::from_string(&self.user_id),
            self.display_name,
            self.current_streak.max(0) as u32,
            self.longest_streak.max(0) as u32,
            self.last_check_in_date,
            WorkHours::new(self.work_start, self.work_end),
            self.check_in_frequency.max(1) as u32,
            self.utc_offset_minutes as i32,
            self.reminders_enabled,
            self.created_at,
            self.updated_at,
        )
    }
}

const PROFILE_COLUMNS: &str = r#"
    user_id,
    display_name,
    current_streak,
    longest_streak,
    last_check_in_date,
    work_start,
    work_end,
    check_in_frequency,
    utc_offset_minutes,
    reminders_enabled,
    created_at,
    updated_at
"#;

pub struct SqliteProfileRepository {
    base: SqliteRepositoryBase,
}

impl SqliteProfileRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl ProfileRepository for SqliteProfileRepository {
    async fn save(&self, profile: &Profile) -> Result<(), DomainError> {
        let query = r#"
            INSERT OR REPLACE INTO profiles (
                user_id,
                display_name,
                current_streak,
                longest_streak,
                last_check_in_date,
                work_start,
                work_end,
                check_in_frequency,
                utc_offset_minutes,
                reminders_enabled,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(profile.user_id().as_str())
                    .bind(profile.display_name())
                    .bind(profile.current_streak() as i64)
                    .bind(profile.longest_streak() as i64)
                    .bind(profile.last_check_in_date())
                    .bind(profile.work_hours().start)
                    .bind(profile.work_hours().end)
                    .bind(profile.check_in_frequency() as i64)
                    .bind(profile.utc_offset_minutes() as i64)
                    .bind(profile.reminders_enabled())
                    .bind(profile.created_at())
                    .bind(profile.updated_at()),
                "Save profile",
            )
            .await?;

        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError> {
        let query = format!(
            "SELECT {} FROM profiles WHERE user_id = ?1",
            PROFILE_COLUMNS
        );

        let row: Option<ProfileRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query).bind(user_id.as_str()),
                "Find profile by user id",
            )
            .await?;

        Ok(row.map(ProfileRow::into_profile))
    }

    async fn find_reminder_enabled(&self) -> Result<Vec<Profile>, DomainError> {
        let query = format!(
            "SELECT {} FROM profiles WHERE reminders_enabled = 1 ORDER BY user_id",
            PROFILE_COLUMNS
        );

        let rows: Vec<ProfileRow> = self
            .base
            .fetch_all(sqlx::query_as(&query), "Find reminder-enabled profiles")
            .await?;

        Ok(rows.into_iter().map(ProfileRow::into_profile).collect())
    }
}
