// ABOUTME: Shared application state for the HTTP layer
// ABOUTME: Wires the SQLite stores into the feature, task and health services

use std::sync::Arc;

use sqlx::SqlitePool;

use worktrack_services::{FeatureService, HealthCheckService, TaskService};
use worktrack_storage::{SqliteFeatureStore, SqliteTaskStore};

/// Services handed to every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub features: Arc<FeatureService>,
    pub tasks: Arc<TaskService>,
    pub health: Arc<HealthCheckService>,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        let feature_store = Arc::new(SqliteFeatureStore::new(pool.clone()));
        let task_store = Arc::new(SqliteTaskStore::new(pool));

        Self {
            features: Arc::new(FeatureService::new(feature_store)),
            tasks: Arc::new(TaskService::new(task_store)),
            health: Arc::new(HealthCheckService::new()),
        }
    }
}
