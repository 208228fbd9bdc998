use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::presentation::response::ApiResponse;
use cadence_domain::shared::{DomainError, ErrorCode};

/// Route-level error: a `DomainError` plus its HTTP status mapping.
///
/// Numeric code ranges map onto statuses: 1xxx means the caller is missing
/// or lacks credentials, 2xxx is not-found, 6xxx is a bad request. Business
/// codes that are caller mistakes get client statuses too: the AI quota
/// code is 429 so clients can back off, double-stopping a session is a
/// state conflict, and nesting a subtask can never succeed. Everything
/// else is a 500.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    fn status(&self) -> StatusCode {
        let code = self.0.code();
        match code {
            ErrorCode::AiQuotaExceeded => return StatusCode::TOO_MANY_REQUESTS,
            ErrorCode::SessionAlreadyStopped => return StatusCode::CONFLICT,
            ErrorCode::SubtaskNesting => return StatusCode::BAD_REQUEST,
            _ => {}
        }
        match code.code() / 1000 {
            1 => StatusCode::UNAUTHORIZED,
            2 => StatusCode::NOT_FOUND,
            6 => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(target: "cadence::api", error = %self.0, "Request failed");
        } else {
            tracing::debug!(target: "cadence::api", error = %self.0, "Request rejected");
        }

        let body: ApiResponse<()> = ApiResponse::error(self.0.code().code(), self.0.message());
        (status, Json(body)).into_response()
    }
}
