use axum::extract::State;
use axum::response::Json as ResponseJson;
use axum::routing::get;
use axum::Router;
use chrono::Utc;

use crate::application::dtos::{CheckInScheduleDto, ProfileDto, StreakDto, UpdateProfileRequest};
use crate::presentation::error::ApiError;
use crate::presentation::extract::Owner;
use crate::presentation::response::ApiResponse;
use crate::presentation::state::AppState;

async fn get_profile(
    State(state): State<AppState>,
    Owner(user_id): Owner,
) -> Result<ResponseJson<ApiResponse<ProfileDto>>, ApiError> {
    let profile = state.profile_service.get_profile(&user_id).await?;
    Ok(ResponseJson(ApiResponse::success(profile)))
}

async fn update_profile(
    State(state): State<AppState>,
    Owner(user_id): Owner,
    axum::Json(payload): axum::Json<UpdateProfileRequest>,
) -> Result<ResponseJson<ApiResponse<ProfileDto>>, ApiError> {
    let profile = state
        .profile_service
        .update_settings(&user_id, payload)
        .await?;

    // Settings drive the reminder loop; pick up the change right away.
    state.reminder_scheduler.respawn(&user_id).await;

    Ok(ResponseJson(ApiResponse::success(profile)))
}

async fn get_streak(
    State(state): State<AppState>,
    Owner(user_id): Owner,
) -> Result<ResponseJson<ApiResponse<StreakDto>>, ApiError> {
    let streak = state.profile_service.get_streak(&user_id, Utc::now()).await?;
    Ok(ResponseJson(ApiResponse::success(streak)))
}

pub async fn get_schedule(
    State(state): State<AppState>,
    Owner(user_id): Owner,
) -> Result<ResponseJson<ApiResponse<CheckInScheduleDto>>, ApiError> {
    let schedule = state
        .profile_service
        .get_schedule(&user_id, Utc::now())
        .await?;
    Ok(ResponseJson(ApiResponse::success(schedule)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/profile/streak", get(get_streak))
}
