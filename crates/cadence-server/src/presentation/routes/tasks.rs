use axum::extract::{Path, Query, State};
use axum::response::Json as ResponseJson;
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;

use crate::application::dtos::{
    ChangeTaskStatusRequest, CreateTaskRequest, TaskDto, TaskHistoryEntryDto, UpdateTaskRequest,
};
use crate::presentation::error::ApiError;
use crate::presentation::extract::Owner;
use crate::presentation::response::ApiResponse;
use crate::presentation::state::AppState;
use cadence_domain::shared::TaskId;

#[derive(Debug, Deserialize)]
struct ListParams {
    status: Option<String>,
}

async fn create_task(
    State(state): State<AppState>,
    Owner(user_id): Owner,
    axum::Json(payload): axum::Json<CreateTaskRequest>,
) -> Result<ResponseJson<ApiResponse<TaskDto>>, ApiError> {
    let task = state.task_service.create(&user_id, payload).await?;
    Ok(ResponseJson(ApiResponse::success(task)))
}

async fn list_tasks(
    State(state): State<AppState>,
    Owner(user_id): Owner,
    Query(params): Query<ListParams>,
) -> Result<ResponseJson<ApiResponse<Vec<TaskDto>>>, ApiError> {
    let tasks = state
        .task_service
        .list(&user_id, params.status.as_deref())
        .await?;
    Ok(ResponseJson(ApiResponse::success(tasks)))
}

async fn get_task(
    State(state): State<AppState>,
    Owner(user_id): Owner,
    Path(id): Path<String>,
) -> Result<ResponseJson<ApiResponse<TaskDto>>, ApiError> {
    let task = state
        .task_service
        .get(&user_id, &TaskId::from_string(&id))
        .await?;
    Ok(ResponseJson(ApiResponse::success(task)))
}

async fn update_task(
    State(state): State<AppState>,
    Owner(user_id): Owner,
    Path(id): Path<String>,
    axum::Json(payload): axum::Json<UpdateTaskRequest>,
) -> Result<ResponseJson<ApiResponse<TaskDto>>, ApiError> {
    let task = state
        .task_service
        .update(&user_id, &TaskId::from_string(&id), payload)
        .await?;
    Ok(ResponseJson(ApiResponse::success(task)))
}

async fn delete_task(
    State(state): State<AppState>,
    Owner(user_id): Owner,
    Path(id): Path<String>,
) -> Result<ResponseJson<ApiResponse<u64>>, ApiError> {
    let deleted = state
        .task_service
        .delete(&user_id, &TaskId::from_string(&id))
        .await?;
    Ok(ResponseJson(ApiResponse::success(deleted)))
}

async fn change_status(
    State(state): State<AppState>,
    Owner(user_id): Owner,
    Path(id): Path<String>,
    axum::Json(payload): axum::Json<ChangeTaskStatusRequest>,
) -> Result<ResponseJson<ApiResponse<TaskDto>>, ApiError> {
    let task = state
        .task_service
        .change_status(&user_id, &TaskId::from_string(&id), payload)
        .await?;
    Ok(ResponseJson(ApiResponse::success(task)))
}

async fn list_subtasks(
    State(state): State<AppState>,
    Owner(user_id): Owner,
    Path(id): Path<String>,
) -> Result<ResponseJson<ApiResponse<Vec<TaskDto>>>, ApiError> {
    let subtasks = state
        .task_service
        .subtasks(&user_id, &TaskId::from_string(&id))
        .await?;
    Ok(ResponseJson(ApiResponse::success(subtasks)))
}

async fn task_history(
    State(state): State<AppState>,
    Owner(user_id): Owner,
    Path(id): Path<String>,
) -> Result<ResponseJson<ApiResponse<Vec<TaskHistoryEntryDto>>>, ApiError> {
    let history = state
        .task_service
        .history(&user_id, &TaskId::from_string(&id))
        .await?;
    Ok(ResponseJson(ApiResponse::success(history)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/tasks/{id}/status", post(change_status))
        .route("/tasks/{id}/subtasks", get(list_subtasks))
        .route("/tasks/{id}/history", get(task_history))
}
