// ABOUTME: Wire shapes for feature and task requests and responses
// ABOUTME: Optional request keys decode to Field, optional response keys are omitted when null

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use worktrack_core::{Field, GitData};

/// Request body for creating a feature
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFeatureRequest {
    /// Missing decodes to an empty name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: Field<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub created_by: Field<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub priority: Field<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub status: Field<String>,
}

/// Request body for updating a feature. Omitted keys clear the stored value; an omitted
/// name becomes empty.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateFeatureRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: Field<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub priority: Field<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub status: Field<String>,
}

/// Request body for creating a task
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: Field<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub created_by: Field<String>,
    /// Required; must name an existing feature
    #[serde(default)]
    #[schema(value_type = String)]
    pub feature_id: Field<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub priority: Field<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub status: Field<String>,
    /// Arbitrary JSON, stored and returned verbatim
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub git_data: Field<GitData>,
}

/// Request body for updating a task. Omitted optional keys clear the stored value.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Field<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: Field<String>,
    /// When present, the task is re-pointed and its cached feature name refreshed
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub feature_id: Field<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub priority: Field<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub status: Field<String>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub git_data: Field<GitData>,
}

/// HTTP representation of a feature
#[derive(Debug, Serialize, ToSchema)]
pub struct FeatureResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// HTTP representation of a task
#[derive(Debug, Serialize, ToSchema)]
pub struct TaskResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub feature_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub git_data: Option<GitData>,
}
