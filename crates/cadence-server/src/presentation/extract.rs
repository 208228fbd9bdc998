use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::presentation::error::ApiError;
use cadence_domain::shared::{DomainError, UserId};

pub const USER_ID_HEADER: &str = "x-user-id";

/// Caller identity taken from the `X-User-Id` header.
///
/// Authentication itself happens upstream; every route still requires the
/// header so all reads and writes stay scoped to one owner.
pub struct Owner(pub UserId);

impl<S> FromRequestParts<S> for Owner
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty());

        match raw {
            Some(id) => Ok(Owner(UserId::from_string(id))),
            None => Err(ApiError(DomainError::MissingCallerIdentity(
                "X-User-Id header is required".to_string(),
            ))),
        }
    }
}
