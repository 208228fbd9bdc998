use axum::extract::{Path, Query, State};
use axum::response::Json as ResponseJson;
use axum::routing::{get, post};
use axum::Router;
use chrono::Utc;
use serde::Deserialize;

use crate::application::dtos::{StartWorkSessionRequest, WorkSessionDto};
use crate::presentation::error::ApiError;
use crate::presentation::extract::Owner;
use crate::presentation::response::ApiResponse;
use crate::presentation::state::AppState;
use cadence_domain::shared::WorkSessionId;

#[derive(Debug, Deserialize)]
struct ListParams {
    task_id: Option<String>,
}

async fn start_session(
    State(state): State<AppState>,
    Owner(user_id): Owner,
    axum::Json(payload): axum::Json<StartWorkSessionRequest>,
) -> Result<ResponseJson<ApiResponse<WorkSessionDto>>, ApiError> {
    let session = state
        .work_session_service
        .start(&user_id, payload)
        .await?;
    Ok(ResponseJson(ApiResponse::success(session)))
}

async fn stop_session(
    State(state): State<AppState>,
    Owner(user_id): Owner,
    Path(id): Path<String>,
) -> Result<ResponseJson<ApiResponse<WorkSessionDto>>, ApiError> {
    let session = state
        .work_session_service
        .stop(&user_id, &WorkSessionId::from_string(&id), Utc::now())
        .await?;
    Ok(ResponseJson(ApiResponse::success(session)))
}

async fn list_sessions(
    State(state): State<AppState>,
    Owner(user_id): Owner,
    Query(params): Query<ListParams>,
) -> Result<ResponseJson<ApiResponse<Vec<WorkSessionDto>>>, ApiError> {
    let sessions = state
        .work_session_service
        .list(&user_id, params.task_id.as_deref())
        .await?;
    Ok(ResponseJson(ApiResponse::success(sessions)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/work-sessions", get(list_sessions))
        .route("/work-sessions/start", post(start_session))
        .route("/work-sessions/{id}/stop", post(stop_session))
}
