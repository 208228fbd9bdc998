use async_trait::async_trait;

use super::PushSubscription;
use crate::shared::{DomainError, SubscriptionId, UserId};

#[async_trait]
pub trait PushSubscriptionRepository: Send + Sync {
    async fn save(&self, subscription: &PushSubscription) -> Result<(), DomainError>;

    async fn find_by_id(
        &self,
        user_id: &UserId,
        id: &SubscriptionId,
    ) -> Result<Option<PushSubscription>, DomainError>;

    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<PushSubscription>, DomainError>;

    async fn find_enabled_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<PushSubscription>, DomainError>;

    async fn delete(&self, user_id: &UserId, id: &SubscriptionId) -> Result<u64, DomainError>;
}
