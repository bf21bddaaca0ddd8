// ABOUTME: HTTP API layer for Worktrack providing REST endpoints and routing
// ABOUTME: Integration layer that maps requests onto the feature and task services

use axum::{
    routing::{get, post, put},
    Json, Router,
};

pub mod error;
pub mod extract;
pub mod features_handlers;
pub mod health_handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod state;
pub mod tasks_handlers;
pub mod transformers;
pub mod validation;

pub use error::ApiError;
pub use state::AppState;

/// Creates the features router
pub fn create_features_router() -> Router<AppState> {
    Router::new()
        .route(
            "/features",
            post(features_handlers::create_feature).get(features_handlers::list_features),
        )
        .route(
            "/features/{id}",
            put(features_handlers::update_feature).delete(features_handlers::delete_feature),
        )
        // An empty id segment is a client error, not an unknown route
        .route(
            "/features/",
            put(features_handlers::missing_feature_id)
                .delete(features_handlers::missing_feature_id),
        )
}

/// Creates the tasks router
pub fn create_tasks_router() -> Router<AppState> {
    Router::new()
        .route(
            "/tasks",
            post(tasks_handlers::create_task).get(tasks_handlers::list_tasks),
        )
        .route(
            "/tasks/{id}",
            put(tasks_handlers::update_task).delete(tasks_handlers::delete_task),
        )
        .route(
            "/tasks/",
            put(tasks_handlers::missing_task_id).delete(tasks_handlers::missing_task_id),
        )
}

async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::openapi())
}

/// Builds the complete application router with middleware applied
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health_handlers::health_check))
        .route("/openapi.json", get(openapi_document))
        .merge(create_features_router())
        .merge(create_tasks_router());

    middleware::apply(router).with_state(state)
}
