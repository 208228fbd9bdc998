use serde::{Deserialize, Serialize};

use cadence_domain::notification::PushSubscription;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterSubscriptionRequest {
    pub endpoint: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushSubscriptionDto {
    pub id: String,
    pub endpoint: String,
    pub label: Option<String>,
    pub enabled: bool,
    pub created_at: String, // RFC 3339
}

impl From<&PushSubscription> for PushSubscriptionDto {
    fn from(subscription: &PushSubscription) -> Self {
        Self {
            id: subscription.id().to_string(),
            endpoint: subscription.endpoint().to_string(),
            label: subscription.label().map(str::to_string),
            enabled: subscription.is_enabled(),
            created_at: subscription.created_at().to_rfc3339(),
        }
    }
}
