//! Mock stores and record builders for service unit tests

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use worktrack_core::{
    CreateFeatureParams, CreateTaskParams, Feature, Task, UpdateFeatureParams, UpdateTaskParams,
};
use worktrack_storage::{FeatureStore, StorageResult, TaskStore};

mock! {
    pub FeatureStore {}

    #[async_trait]
    impl FeatureStore for FeatureStore {
        async fn create_feature(
            &self,
            id: Uuid,
            now: DateTime<Utc>,
            params: &CreateFeatureParams,
        ) -> StorageResult<Feature>;
        async fn get_feature(&self, id: Uuid) -> StorageResult<Feature>;
        async fn list_features(&self) -> StorageResult<Vec<Feature>>;
        async fn update_feature(
            &self,
            params: &UpdateFeatureParams,
            updated_at: DateTime<Utc>,
        ) -> StorageResult<Feature>;
        async fn delete_feature(&self, id: Uuid) -> StorageResult<u64>;
    }
}

mock! {
    pub TaskStore {}

    #[async_trait]
    impl TaskStore for TaskStore {
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
}

pub fn feature(id: Uuid, name: &str) -> Feature {
    let now = Utc::now();
    Feature {
        id,
        name: name.to_string(),
        description: None,
        created_by: None,
        priority: None,
        status: None,
        created_at: now,
        updated_at: now,
    }
}

/// Echoes what the store would persist for a task insert
pub fn task_from(id: Uuid, now: DateTime<Utc>, params: &CreateTaskParams) -> Task {
    Task {
        id,
        name: params.name.clone(),
        description: params.description.as_option().cloned(),
        created_by: params.created_by.as_option().copied(),
        feature_id: params.feature.id,
        feature_name: Some(params.feature.name.clone()),
        priority: params.priority.as_option().cloned(),
        status: params.status.as_option().cloned(),
        git_data: params.git_data.as_option().cloned(),
        created_at: now,
        updated_at: now,
    }
}
