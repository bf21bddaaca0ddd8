// ABOUTME: Persistence gateway for features and tasks
// ABOUTME: Store traits, SQLite implementations, and connection pool setup

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use worktrack_core::{
    CreateFeatureParams, CreateTaskParams, Feature, Task, UpdateFeatureParams, UpdateTaskParams,
};

pub mod db;
pub mod features;
pub mod tasks;

pub use db::{connect, migrate, DbConfig};
pub use features::SqliteFeatureStore;
pub use tasks::SqliteTaskStore;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Record not found")]
    NotFound,
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StorageError::NotFound | StorageError::Sqlx(sqlx::Error::RowNotFound)
        )
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Parameterized CRUD statements for features.
///
/// Each call runs a single statement on a pooled connection; there are no multi-statement
/// transactions.
#[async_trait]
pub trait FeatureStore: Send + Sync {
    /// Inserts a feature under `id`, with both timestamps set to `now`.
    async fn create_feature(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
        params: &CreateFeatureParams,
    ) -> StorageResult<Feature>;

    async fn get_feature(&self, id: Uuid) -> StorageResult<Feature>;

    async fn list_features(&self) -> StorageResult<Vec<Feature>>;

    /// Returns [`StorageError::NotFound`] when no feature has `params.id`.
    async fn update_feature(
        &self,
        params: &UpdateFeatureParams,
        updated_at: DateTime<Utc>,
    ) -> StorageResult<Feature>;

    /// Returns the number of rows removed, which is zero for an unknown id.
    async fn delete_feature(&self, id: Uuid) -> StorageResult<u64>;
}

/// Parameterized CRUD statements for tasks.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn create_task(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
        params: &CreateTaskParams,
    ) -> StorageResult<Task>;

    async fn get_task(&self, id: Uuid) -> StorageResult<Task>;

    async fn list_tasks(&self) -> StorageResult<Vec<Task>>;

    async fn update_task(
        &self,
        params: &UpdateTaskParams,
        updated_at: DateTime<Utc>,
    ) -> StorageResult<Task>;

    async fn delete_task(&self, id: Uuid) -> StorageResult<u64>;
}
