use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use cadence_domain::notification::{PushSubscription, PushSubscriptionRepository};
use cadence_domain::shared::{DomainError, SubscriptionId, UserId};

#[derive(FromRow)]
struct SubscriptionRow {
    id: String,
    user_id: String,
    endpoint: String,
    label: Option<String>,
    enabled: bool,
    created_at: DateTime<Utc>,
}

impl SubscriptionRow {
    fn into_subscription(self) -> PushSubscription {
        PushSubscription::restore(
            SubscriptionId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            self.endpoint,
            self.label,
            self.enabled,
            self.created_at,
        )
    }
}

pub struct SqlitePushSubscriptionRepository {
    base: SqliteRepositoryBase,
}

impl SqlitePushSubscriptionRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl PushSubscriptionRepository for SqlitePushSubscriptionRepository {
    async fn save(&self, subscription: &PushSubscription) -> Result<(), DomainError> {
        let query = r#"
            INSERT OR REPLACE INTO push_subscriptions (
                id,
                user_id,
                endpoint,
                label,
                enabled,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(subscription.id().as_str())
                    .bind(subscription.user_id().as_str())
                    .bind(subscription.endpoint())
                    .bind(subscription.label())
                    .bind(subscription.is_enabled())
                    .bind(subscription.created_at()),
                "Save push subscription",
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        user_id: &UserId,
        id: &SubscriptionId,
    ) -> Result<Option<PushSubscription>, DomainError> {
        let query = r#"
            SELECT id, user_id, endpoint, label, enabled, created_at
            FROM push_subscriptions
            WHERE user_id = ?1 AND id = ?2
        "#;

        let row: Option<SubscriptionRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query)
                    .bind(user_id.as_str())
                    .bind(id.as_str()),
                "Find push subscription by id",
            )
            .await?;

        Ok(row.map(SubscriptionRow::into_subscription))
    }

    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<PushSubscription>, DomainError> {
        let query = r#"
            SELECT id, user_id, endpoint, label, enabled, created_at
            FROM push_subscriptions
            WHERE user_id = ?1
            ORDER BY created_at
        "#;

        let rows: Vec<SubscriptionRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query).bind(user_id.as_str()),
                "List push subscriptions",
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(SubscriptionRow::into_subscription)
            .collect())
    }

    async fn find_enabled_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<PushSubscription>, DomainError> {
        let query = r#"
            SELECT id, user_id, endpoint, label, enabled, created_at
            FROM push_subscriptions
            WHERE user_id = ?1 AND enabled = 1
            ORDER BY created_at
        "#;

        let rows: Vec<SubscriptionRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query).bind(user_id.as_str()),
                "List enabled push subscriptions",
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(SubscriptionRow::into_subscription)
            .collect())
    }

    async fn delete(&self, user_id: &UserId, id: &SubscriptionId) -> Result<u64, DomainError> {
        let query = "DELETE FROM push_subscriptions WHERE user_id = ?1 AND id = ?2";

        self.base
            .execute(
                sqlx::query(query)
                    .bind(user_id.as_str())
                    .bind(id.as_str()),
                "Delete push subscription",
            )
            .await
    }
}
