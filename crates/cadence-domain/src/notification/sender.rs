use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

/// Notification message to be sent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationMessage {
    /// Message title
    pub title: String,
    /// Message content/body
    pub content: String,
    /// Optional link URL
    pub link: Option<String>,
}

impl NotificationMessage {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            link: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// Notification sender trait (Strategy pattern)
/// Delivery is fire-and-forget; failures are logged by callers, not surfaced.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Send a notification message to one subscription endpoint.
    async fn send(&self, endpoint: &str, message: &NotificationMessage)
        -> Result<(), DomainError>;
}
