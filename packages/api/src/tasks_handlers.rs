// ABOUTME: HTTP request handlers for task operations
// ABOUTME: Validates feature references and snapshots the feature name before writing tasks

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info, warn};
use uuid::Uuid;

use worktrack_core::{CreateTaskParams, FeatureRef, Field, UpdateTaskParams};

use crate::error::ApiError;
use crate::extract::{DeferredJson, JsonBody};
use crate::models::{CreateTaskRequest, TaskResponse, UpdateTaskRequest};
use crate::state::AppState;
use crate::validation::{parse_path_id, parse_uuid_field};

const TASK_ID_REQUIRED: &str = "Task ID is required";
const INVALID_TASK_ID: &str = "Invalid task ID";
const INVALID_FEATURE_ID: &str = "Invalid FeatureID format";

/// Fetches the referenced feature so its current name can be cached on the task.
async fn resolve_feature(state: &AppState, feature_id: Uuid) -> Result<FeatureRef, ApiError> {
    state
        .features
        .resolve_reference(feature_id)
        .await
        .map_err(|e| {
            warn!(feature_id = %feature_id, error = %e, "Failed to fetch feature for task");
            ApiError::Internal("Failed to fetch feature for provided FeatureID")
        })
}

/// Create a new task under an existing feature
#[utoipa::path(
    post,
    path = "/tasks",
    tag = "tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = TaskResponse),
        (status = 400, description = "Invalid request body, feature_id or created_by", body = String),
        (status = 500, description = "Feature lookup or task creation failed", body = String),
    )
)]
pub async fn create_task(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    info!("Creating task '{}'", request.name);

    let feature_id = match parse_uuid_field(request.feature_id, "feature_id", INVALID_FEATURE_ID)? {
        Field::Present(id) => id,
        Field::Absent => return Err(ApiError::BadRequest("FeatureID is required")),
    };
    let created_by = parse_uuid_field(
        request.created_by,
        "created_by",
        "Invalid CreatedBy UUID format",
    )?;

    let feature = resolve_feature(&state, feature_id).await?;

    let params = CreateTaskParams {
        name: request.name,
        description: request.description,
        created_by,
        feature,
        priority: request.priority,
        status: request.status,
        git_data: request.git_data,
    };

    let task = state.tasks.create_task(params).await.map_err(|e| {
        error!(feature_id = %feature_id, error = %e, "Failed to create task");
        ApiError::Internal("Failed to create task")
    })?;

    Ok((StatusCode::CREATED, Json(task.into())))
}

/// List all tasks
#[utoipa::path(
    get,
    path = "/tasks",
    tag = "tasks",
    responses(
        (status = 200, description = "All tasks, oldest first", body = [TaskResponse]),
        (status = 500, description = "Failed to list tasks", body = String),
    )
)]
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    info!("Listing tasks");

    let tasks = state.tasks.list_tasks().await.map_err(|e| {
        error!(error = %e, "Failed to list tasks");
        ApiError::Internal("Failed to list tasks")
    })?;

    info!("Listed {} tasks", tasks.len());
    Ok(Json(tasks.into_iter().map(Into::into).collect()))
}

/// Replace the mutable fields of a task, optionally re-pointing it at another feature
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = String, Path, description = "Task ID")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Task updated", body = TaskResponse),
        (status = 400, description = "Invalid task ID, request body or feature_id", body = String),
        (status = 500, description = "Feature lookup or task update failed", body = String),
    )
)]
pub async fn update_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: DeferredJson<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    let id = parse_path_id(&raw_id, TASK_ID_REQUIRED, INVALID_TASK_ID)?;
    let request = body.decode()?;

    info!("Updating task: {}", id);

    let feature = match parse_uuid_field(request.feature_id, "feature_id", INVALID_FEATURE_ID)? {
        Field::Present(feature_id) => Field::Present(resolve_feature(&state, feature_id).await?),
        Field::Absent => Field::Absent,
    };

    let params = UpdateTaskParams {
        id,
        name: request.name,
        description: request.description,
        feature,
        priority: request.priority,
        status: request.status,
        git_data: request.git_data,
    };

    let task = state.tasks.update_task(params).await.map_err(|e| {
        error!(task_id = %id, error = %e, "Failed to update task");
        ApiError::Internal("Failed to update task")
    })?;

    Ok(Json(task.into()))
}

/// Delete a task. Deleting an unknown id succeeds.
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = String, Path, description = "Task ID")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 400, description = "Invalid task ID", body = String),
        (status = 500, description = "Failed to delete task", body = String),
    )
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_path_id(&raw_id, TASK_ID_REQUIRED, INVALID_TASK_ID)?;

    info!("Deleting task: {}", id);

    state.tasks.delete_task(id).await.map_err(|e| {
        error!(task_id = %id, error = %e, "Failed to delete task");
        ApiError::Internal("Failed to delete task")
    })?;

    Ok(StatusCode::NO_CONTENT)
}

/// `PUT` or `DELETE` on `/tasks/` with no id segment
pub async fn missing_task_id() -> ApiError {
    ApiError::BadRequest(TASK_ID_REQUIRED)
}
