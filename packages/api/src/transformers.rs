// ABOUTME: Conversions from stored records to response bodies
// ABOUTME: Pure mapping: UUIDs to canonical strings, timestamps to RFC 3339, nulls omitted

use chrono::{DateTime, SecondsFormat, Utc};

use worktrack_core::{Feature, Task};

use crate::models::{FeatureResponse, TaskResponse};

fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl From<Feature> for FeatureResponse {
    fn from(feature: Feature) -> Self {
        Self {
            id: feature.id.to_string(),
            name: feature.name,
            description: feature.description,
            created_at: format_timestamp(&feature.created_at),
            updated_at: format_timestamp(&feature.updated_at),
            created_by: feature.created_by.map(|id| id.to_string()),
            priority: feature.priority,
            status: feature.status,
        }
    }
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.to_string(),
            name: task.name,
            description: task.description,
            created_at: format_timestamp(&task.created_at),
            updated_at: format_timestamp(&task.updated_at),
            created_by: task.created_by.map(|id| id.to_string()),
            feature_id: task.feature_id.to_string(),
            feature_name: task.feature_name,
            priority: task.priority,
            status: task.status,
            git_data: task.git_data,
        }
    }
}
