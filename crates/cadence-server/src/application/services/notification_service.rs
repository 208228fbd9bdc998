use std::sync::Arc;

use crate::application::dtos::{PushSubscriptionDto, RegisterSubscriptionRequest};
use cadence_domain::notification::{
    NotificationMessage, NotificationSender, PushSubscription, PushSubscriptionRepository,
};
use cadence_domain::shared::{DomainError, SubscriptionId, UserId};

/// Coordinates webhook delivery to a user's registered endpoints.
pub struct NotificationService {
    subscription_repo: Arc<dyn PushSubscriptionRepository>,
    sender: Arc<dyn NotificationSender>,
}

impl NotificationService {
    pub fn new(
        subscription_repo: Arc<dyn PushSubscriptionRepository>,
        sender: Arc<dyn NotificationSender>,
    ) -> Self {
        Self {
            subscription_repo,
            sender,
        }
    }

    pub async fn register(
        &self,
        user_id: &UserId,
        request: RegisterSubscriptionRequest,
    ) -> Result<PushSubscriptionDto, DomainError> {
        let subscription =
            PushSubscription::new(user_id.clone(), request.endpoint, request.label)?;
        self.subscription_repo.save(&subscription).await?;

        tracing::info!(
            target: "cadence::notification",
            user_id = %user_id,
            subscription_id = %subscription.id(),
            "Push subscription registered"
        );
        Ok(PushSubscriptionDto::from(&subscription))
    }

    pub async fn list(&self, user_id: &UserId) -> Result<Vec<PushSubscriptionDto>, DomainError> {
        let subscriptions = self.subscription_repo.find_by_user_id(user_id).await?;
        Ok(subscriptions.iter().map(PushSubscriptionDto::from).collect())
    }

    pub async fn remove(
        &self,
        user_id: &UserId,
        id: &SubscriptionId,
    ) -> Result<(), DomainError> {
        let removed = self.subscription_repo.delete(user_id, id).await?;
        if removed == 0 {
            return Err(DomainError::SubscriptionNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Deliver a test message to one subscription. Unlike prompt fan-out this
    /// surfaces the send error so the user can see a broken endpoint.
    pub async fn send_test(
        &self,
        user_id: &UserId,
        id: &SubscriptionId,
    ) -> Result<(), DomainError> {
        let subscription = self
            .subscription_repo
            .find_by_id(user_id, id)
            .await?
            .ok_or_else(|| DomainError::SubscriptionNotFound(id.to_string()))?;

        let message = NotificationMessage::new(
            "Test notification",
            "If you can read this, the endpoint is wired up correctly.",
        );
        self.sender.send(subscription.endpoint(), &message).await
    }

    /// Fan a message out to every enabled subscription. Fire-and-forget:
    /// individual send failures are logged, never propagated.
    pub async fn send_to_all(
        &self,
        user_id: &UserId,
        message: &NotificationMessage,
    ) -> Result<(), DomainError> {
        let subscriptions = self
            .subscription_repo
            .find_enabled_by_user_id(user_id)
            .await?;

        if subscriptions.is_empty() {
            tracing::debug!(
                target: "cadence::notification",
                user_id = %user_id,
                "No enabled subscriptions, skipping delivery"
            );
            return Ok(());
        }

        for subscription in subscriptions {
            if let Err(e) = self.sender.send(subscription.endpoint(), message).await {
                tracing::error!(
                    target: "cadence::notification",
                    subscription_id = %subscription.id(),
                    error = %e,
                    "Failed to deliver notification"
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{
        MockNotificationSender, MockSubscriptionRepository,
    };

    fn service() -> (
        NotificationService,
        Arc<MockSubscriptionRepository>,
        Arc<MockNotificationSender>,
    ) {
        let repo = Arc::new(MockSubscriptionRepository::new());
        let sender = Arc::new(MockNotificationSender::new());
        (
            NotificationService::new(repo.clone(), sender.clone()),
            repo,
            sender,
        )
    }

    #[tokio::test]
    async fn register_rejects_non_http_endpoints() {
        let (service, _, _) = service();
        let result = service
            .register(
                &UserId::new(),
                RegisterSubscriptionRequest {
                    endpoint: "ftp://example.com/hook".to_string(),
                    label: None,
                },
            )
            .await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn send_to_all_hits_only_enabled_endpoints() {
        let (service, repo, sender) = service();
        let user_id = UserId::new();

        service
            .register(
                &user_id,
                RegisterSubscriptionRequest {
                    endpoint: "https://hooks.example.com/on".to_string(),
                    label: None,
                },
            )
            .await
            .expect("register enabled");

        let mut disabled = PushSubscription::new(
            user_id.clone(),
            "https://hooks.example.com/off".to_string(),
            None,
        )
        .expect("subscription");
        disabled.set_enabled(false);
        repo.save(&disabled).await.expect("save disabled");

        service
            .send_to_all(&user_id, &NotificationMessage::new("Hi", "Check in?"))
            .await
            .expect("fan out");

        let sent = sender.sent.lock().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "https://hooks.example.com/on");
    }

    #[tokio::test]
    async fn send_to_all_swallows_send_failures() {
        let (service, _, sender) = service();
        let user_id = UserId::new();

        service
            .register(
                &user_id,
                RegisterSubscriptionRequest {
                    endpoint: "https://hooks.example.com/broken".to_string(),
                    label: None,
                },
            )
            .await
            .expect("register");
        sender.fail_all().await;

        let result = service
            .send_to_all(&user_id, &NotificationMessage::new("Hi", "Check in?"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn send_test_surfaces_failures() {
        let (service, _, sender) = service();
        let user_id = UserId::new();

        let dto = service
            .register(
                &user_id,
                RegisterSubscriptionRequest {
                    endpoint: "https://hooks.example.com/hook".to_string(),
                    label: None,
                },
            )
            .await
            .expect("register");
        sender.fail_all().await;

        let result = service
            .send_test(&user_id, &SubscriptionId::from_string(&dto.id))
            .await;
        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }

    #[tokio::test]
    async fn remove_unknown_subscription_is_not_found() {
        let (service, _, _) = service();
        let result = service
            .remove(&UserId::new(), &SubscriptionId::new())
            .await;
        assert!(matches!(result, Err(DomainError::SubscriptionNotFound(_))));
    }
}
