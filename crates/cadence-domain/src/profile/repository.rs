use async_trait::async_trait;

use super::Profile;
use crate::shared::{DomainError, UserId};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Save (upsert) a profile. Last write wins on the single row; concurrent
    /// check-ins from two devices are an accepted race.
    async fn save(&self, profile: &Profile) -> Result<(), DomainError>;

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError>;

    /// List profiles that have reminders enabled (reminder scheduler input).
    async fn find_reminder_enabled(&self) -> Result<Vec<Profile>, DomainError>;
}
