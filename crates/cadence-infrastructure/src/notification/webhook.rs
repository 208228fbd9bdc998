use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

use cadence_domain::notification::{NotificationMessage, NotificationSender};
use cadence_domain::shared::DomainError;

const SEND_TIMEOUT_SECS: u64 = 10;

/// Delivers reminders by POSTing a small JSON payload to the subscription's
/// webhook endpoint. Endpoints are user-supplied URLs, so the payload stays
/// generic: title, body and an optional link.
pub struct WebhookNotificationSender {
    client: reqwest::Client,
}

impl WebhookNotificationSender {
    pub fn new() -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(SEND_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                DomainError::Infrastructure(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    fn build_payload(message: &NotificationMessage) -> serde_json::Value {
        let mut payload = json!({
            "title": message.title,
            "body": message.content,
        });

        if let Some(link) = &message.link {
            payload["link"] = json!(link);
        }

        payload
    }
}

#[async_trait]
impl NotificationSender for WebhookNotificationSender {
    async fn send(
        &self,
        endpoint: &str,
        message: &NotificationMessage,
    ) -> Result<(), DomainError> {
        let payload = Self::build_payload(message);

        let response = self
            .client
            .post(endpoint)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                DomainError::Infrastructure(format!("Failed to send notification: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Infrastructure(format!(
                "Webhook responded with status {}: {}",
                status, body
            )));
        }

        Ok(())
    }
}
