use axum::extract::{Path, State};
use axum::response::Json as ResponseJson;
use axum::routing::{get, post};
use axum::Router;

use crate::application::dtos::{PushSubscriptionDto, RegisterSubscriptionRequest};
use crate::presentation::error::ApiError;
use crate::presentation::extract::Owner;
use crate::presentation::response::ApiResponse;
use crate::presentation::state::AppState;
use cadence_domain::shared::SubscriptionId;

async fn register(
    State(state): State<AppState>,
    Owner(user_id): Owner,
    axum::Json(payload): axum::Json<RegisterSubscriptionRequest>,
) -> Result<ResponseJson<ApiResponse<PushSubscriptionDto>>, ApiError> {
    let subscription = state
        .notification_service
        .register(&user_id, payload)
        .await?;
    Ok(ResponseJson(ApiResponse::success(subscription)))
}

async fn list(
    State(state): State<AppState>,
    Owner(user_id): Owner,
) -> Result<ResponseJson<ApiResponse<Vec<PushSubscriptionDto>>>, ApiError> {
    let subscriptions = state.notification_service.list(&user_id).await?;
    Ok(ResponseJson(ApiResponse::success(subscriptions)))
}

async fn remove(
    State(state): State<AppState>,
    Owner(user_id): Owner,
    Path(id): Path<String>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    state
        .notification_service
        .remove(&user_id, &SubscriptionId::from_string(&id))
        .await?;
    Ok(ResponseJson(ApiResponse::success(())))
}

async fn send_test(
    State(state): State<AppState>,
    Owner(user_id): Owner,
    Path(id): Path<String>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    state
        .notification_service
        .send_test(&user_id, &SubscriptionId::from_string(&id))
        .await?;
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/push-subscriptions", get(list).post(register))
        .route("/push-subscriptions/{id}", axum::routing::delete(remove))
        .route("/push-subscriptions/{id}/test", post(send_test))
}
