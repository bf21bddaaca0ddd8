// ABOUTME: HTTP request handlers for feature operations
// ABOUTME: Create, list, update and delete features through the feature service

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info};

use worktrack_core::{CreateFeatureParams, UpdateFeatureParams};

use crate::error::ApiError;
use crate::extract::{DeferredJson, JsonBody};
use crate::models::{CreateFeatureRequest, FeatureResponse, UpdateFeatureRequest};
use crate::state::AppState;
use crate::validation::{parse_path_id, parse_uuid_field};

const FEATURE_ID_REQUIRED: &str = "Feature ID is required";
const INVALID_FEATURE_ID: &str = "Invalid feature ID";

/// Create a new feature
#[utoipa::path(
    post,
    path = "/features",
    tag = "features",
    request_body = CreateFeatureRequest,
    responses(
        (status = 201, description = "Feature created", body = FeatureResponse),
        (status = 400, description = "Invalid request body or created_by", body = String),
        (status = 500, description = "Failed to create feature", body = String),
    )
)]
pub async fn create_feature(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateFeatureRequest>,
) -> Result<(StatusCode, Json<FeatureResponse>), ApiError> {
    info!("Creating feature '{}'", request.name);

    let created_by = parse_uuid_field(
        request.created_by,
        "created_by",
        "Invalid CreatedBy UUID format",
    )?;

    let params = CreateFeatureParams {
        name: request.name,
        description: request.description,
        created_by,
        priority: request.priority,
        status: request.status,
    };

    let feature = state.features.create_feature(params).await.map_err(|e| {
        error!(error = %e, "Failed to create feature");
        ApiError::Internal("Failed to create feature")
    })?;

    Ok((StatusCode::CREATED, Json(feature.into())))
}

/// List all features
#[utoipa::path(
    get,
    path = "/features",
    tag = "features",
    responses(
        (status = 200, description = "All features, oldest first", body = [FeatureResponse]),
        (status = 500, description = "Failed to list features", body = String),
    )
)]
pub async fn list_features(
    State(state): State<AppState>,
) -> Result<Json<Vec<FeatureResponse>>, ApiError> {
    info!("Listing features");

    let features = state.features.list_features().await.map_err(|e| {
        error!(error = %e, "Failed to list features");
        ApiError::Internal("Failed to list features")
    })?;

    info!("Listed {} features", features.len());
    Ok(Json(features.into_iter().map(Into::into).collect()))
}

/// Replace the mutable fields of a feature
#[utoipa::path(
    put,
    path = "/features/{id}",
    tag = "features",
    params(("id" = String, Path, description = "Feature ID")),
    request_body = UpdateFeatureRequest,
    responses(
        (status = 200, description = "Feature updated", body = FeatureResponse),
        (status = 400, description = "Invalid feature ID or request body", body = String),
        (status = 500, description = "Failed to update feature", body = String),
    )
)]
pub async fn update_feature(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: DeferredJson<UpdateFeatureRequest>,
) -> Result<Json<FeatureResponse>, ApiError> {
    let id = parse_path_id(&raw_id, FEATURE_ID_REQUIRED, INVALID_FEATURE_ID)?;
    let request = body.decode()?;

    info!("Updating feature: {}", id);

    let params = UpdateFeatureParams {
        id,
        name: request.name,
        description: request.description,
        priority: request.priority,
        status: request.status,
    };

    let feature = state.features.update_feature(params).await.map_err(|e| {
        error!(feature_id = %id, error = %e, "Failed to update feature");
        ApiError::Internal("Failed to update feature")
    })?;

    Ok(Json(feature.into()))
}

/// Delete a feature. Deleting an unknown id succeeds.
#[utoipa::path(
    delete,
    path = "/features/{id}",
    tag = "features",
    params(("id" = String, Path, description = "Feature ID")),
    responses(
        (status = 204, description = "Feature deleted"),
        (status = 400, description = "Invalid feature ID", body = String),
        (status = 500, description = "Failed to delete feature", body = String),
    )
)]
pub async fn delete_feature(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_path_id(&raw_id, FEATURE_ID_REQUIRED, INVALID_FEATURE_ID)?;

    info!("Deleting feature: {}", id);

    state.features.delete_feature(id).await.map_err(|e| {
        error!(feature_id = %id, error = %e, "Failed to delete feature");
        ApiError::Internal("Failed to delete feature")
    })?;

    Ok(StatusCode::NO_CONTENT)
}

/// `PUT` or `DELETE` on `/features/` with no id segment
pub async fn missing_feature_id() -> ApiError {
    ApiError::BadRequest(FEATURE_ID_REQUIRED)
}
