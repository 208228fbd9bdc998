use async_trait::async_trait;

use super::{RecommendationSet, RecommendationSnapshot};
use crate::shared::DomainError;

/// Outbound port to the generative scheduling endpoint.
///
/// Implementations never mutate task state; they turn a snapshot into an
/// advisory set or a structured error (`AiAuthRequired`, `AiQuotaExceeded`,
/// `RecommendationFailed`) the caller degrades on.
#[async_trait]
pub trait RecommendationClient: Send + Sync {
    async fn recommend(
        &self,
        snapshot: &RecommendationSnapshot,
    ) -> Result<RecommendationSet, DomainError>;
}
