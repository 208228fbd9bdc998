use axum::extract::{Query, State};
use axum::response::Json as ResponseJson;
use axum::routing::get;
use axum::Router;
use chrono::Utc;
use serde::Deserialize;

use crate::application::dtos::{
    CheckInCalendarDto, CheckInDto, CheckInHeatmapDto, SubmitCheckInRequest,
};
use crate::application::queries;
use crate::presentation::error::ApiError;
use crate::presentation::extract::Owner;
use crate::presentation::response::ApiResponse;
use crate::presentation::state::AppState;

const DEFAULT_LIST_LIMIT: u32 = 30;
const DEFAULT_HEATMAP_DAYS: u32 = 90;

#[derive(Debug, Deserialize)]
struct ListParams {
    limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct CalendarParams {
    year: i32,
    month: u32,
}

#[derive(Debug, Deserialize)]
struct HeatmapParams {
    days: Option<u32>,
}

async fn submit_check_in(
    State(state): State<AppState>,
    Owner(user_id): Owner,
    axum::Json(payload): axum::Json<SubmitCheckInRequest>,
) -> Result<ResponseJson<ApiResponse<CheckInDto>>, ApiError> {
    let check_in = state
        .check_in_service
        .submit(&user_id, payload, Utc::now())
        .await?;
    Ok(ResponseJson(ApiResponse::success(check_in)))
}

async fn list_check_ins(
    State(state): State<AppState>,
    Owner(user_id): Owner,
    Query(params): Query<ListParams>,
) -> Result<ResponseJson<ApiResponse<Vec<CheckInDto>>>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let check_ins = state.check_in_service.list_recent(&user_id, limit).await?;
    Ok(ResponseJson(ApiResponse::success(check_ins)))
}

async fn get_calendar(
    State(state): State<AppState>,
    Owner(user_id): Owner,
    Query(params): Query<CalendarParams>,
) -> Result<ResponseJson<ApiResponse<CheckInCalendarDto>>, ApiError> {
    let profile = state.profile_service.ensure_profile(&user_id).await?;
    let calendar = queries::get_calendar(
        state.check_in_repo.as_ref(),
        &profile,
        &user_id,
        params.year,
        params.month,
    )
    .await?;
    Ok(ResponseJson(ApiResponse::success(calendar)))
}

async fn get_heatmap(
    State(state): State<AppState>,
    Owner(user_id): Owner,
    Query(params): Query<HeatmapParams>,
) -> Result<ResponseJson<ApiResponse<CheckInHeatmapDto>>, ApiError> {
    let profile = state.profile_service.ensure_profile(&user_id).await?;
    let heatmap = queries::get_heatmap(
        state.check_in_repo.as_ref(),
        &profile,
        &user_id,
        params.days.unwrap_or(DEFAULT_HEATMAP_DAYS),
        Utc::now(),
    )
    .await?;
    Ok(ResponseJson(ApiResponse::success(heatmap)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/check-ins", get(list_check_ins).post(submit_check_in))
        .route("/check-ins/schedule", get(super::profile::get_schedule))
        .route("/check-ins/calendar", get(get_calendar))
        .route("/check-ins/heatmap", get(get_heatmap))
}
