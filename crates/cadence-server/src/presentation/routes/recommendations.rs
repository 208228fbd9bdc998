use axum::extract::State;
use axum::response::Json as ResponseJson;
use axum::routing::post;
use axum::Router;

use crate::application::dtos::{AcceptRecommendationRequest, RecommendationSetDto, TaskDto};
use crate::presentation::error::ApiError;
use crate::presentation::extract::Owner;
use crate::presentation::response::ApiResponse;
use crate::presentation::state::AppState;

async fn request_recommendations(
    State(state): State<AppState>,
    Owner(user_id): Owner,
) -> Result<ResponseJson<ApiResponse<RecommendationSetDto>>, ApiError> {
    let set = state.recommendation_service.recommend(&user_id).await?;
    Ok(ResponseJson(ApiResponse::success(set)))
}

async fn accept_recommendation(
    State(state): State<AppState>,
    Owner(user_id): Owner,
    axum::Json(payload): axum::Json<AcceptRecommendationRequest>,
) -> Result<ResponseJson<ApiResponse<TaskDto>>, ApiError> {
    let task = state
        .recommendation_service
        .accept(&user_id, payload)
        .await?;
    Ok(ResponseJson(ApiResponse::success(task)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/recommendations", post(request_recommendations))
        .route("/recommendations/accept", post(accept_recommendation))
}
