use async_trait::async_trait;
use chrono::NaiveDate;

use super::CheckIn;
use crate::shared::{DomainError, UserId};

#[async_trait]
pub trait CheckInRepository: Send + Sync {
    /// Insert a check-in. Check-ins are append-only; there is no update.
    async fn insert(&self, check_in: &CheckIn) -> Result<(), DomainError>;

    /// List the most recent check-ins for a user, newest first.
    async fn list_recent(&self, user_id: &UserId, limit: u32)
        -> Result<Vec<CheckIn>, DomainError>;

    /// List check-ins whose UTC timestamp falls in `[start, end]` (inclusive
    /// calendar dates), oldest first. Callers apply the user's offset when
    /// picking the range.
    async fn list_in_date_range(
        &self,
        user_id: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CheckIn>, DomainError>;
}
