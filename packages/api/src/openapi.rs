//! `OpenAPI` document for the feature and task endpoints.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Worktrack API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Features and the tasks that belong to them"
    ),
    paths(
        crate::features_handlers::create_feature,
        crate::features_handlers::list_features,
        crate::features_handlers::update_feature,
        crate::features_handlers::delete_feature,
        crate::tasks_handlers::create_task,
        crate::tasks_handlers::list_tasks,
        crate::tasks_handlers::update_task,
        crate::tasks_handlers::delete_task,
        crate::health_handlers::health_check,
    ),
    components(
        schemas(
            crate::models::CreateFeatureRequest,
            crate::models::UpdateFeatureRequest,
            crate::models::FeatureResponse,
            crate::models::CreateTaskRequest,
            crate::models::UpdateTaskRequest,
            crate::models::TaskResponse,
        )
    ),
    tags(
        (name = "features", description = "Feature operations"),
        (name = "tasks", description = "Task operations"),
        (name = "health", description = "Liveness"),
    ),
)]
pub struct ApiDoc;

/// Returns the generated `OpenAPI` document.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Returns the generated `OpenAPI` document serialized as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn openapi_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc: serde_json::Value = serde_json::from_str(&openapi_json().unwrap()).unwrap();
        let paths = doc["paths"].as_object().unwrap();

        for path in ["/features", "/features/{id}", "/tasks", "/tasks/{id}", "/health"] {
            assert!(paths.contains_key(path), "missing {path}");
        }
        assert!(paths["/tasks"]["post"].is_object());
        assert!(paths["/features/{id}"]["delete"].is_object());
    }
}
