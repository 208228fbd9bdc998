use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, SubscriptionId, UserId};

/// A registered delivery endpoint for check-in prompts and reminders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushSubscription {
    id: SubscriptionId,
    user_id: UserId,
    endpoint: String,
    label: Option<String>,
    enabled: bool,
    created_at: DateTime<Utc>,
}

impl PushSubscription {
    pub fn new(
        user_id: UserId,
        endpoint: String,
        label: Option<String>,
    ) -> Result<Self, DomainError> {
        let endpoint = endpoint.trim().to_string();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(DomainError::Validation(
                "Subscription endpoint must be an http(s) URL".to_string(),
            ));
        }

        Ok(Self {
            id: SubscriptionId::new(),
            user_id,
            endpoint,
            label: label.filter(|l| !l.trim().is_empty()),
            enabled: true,
            created_at: Utc::now(),
        })
    }

    pub fn restore(
        id: SubscriptionId,
        user_id: UserId,
        endpoint: String,
        label: Option<String>,
        enabled: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            endpoint,
            label,
            enabled,
            created_at,
        }
    }

    pub fn id(&self) -> &SubscriptionId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
