// ABOUTME: Task service
// ABOUTME: Persists tasks whose feature references were resolved by the caller

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use worktrack_core::{CreateTaskParams, Task, UpdateTaskParams};
use worktrack_storage::TaskStore;

use crate::error::{ServiceError, ServiceResult};

pub struct TaskService {
    store: Arc<dyn TaskStore>,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// Stores a new task under a fresh random id.
    ///
    /// `params.feature` must come from [`crate::FeatureService::resolve_reference`];
    /// its name is written as the task's cached feature name.
    pub async fn create_task(&self, params: CreateTaskParams) -> ServiceResult<Task> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        debug!(
            task_id = %id,
            feature_id = %params.feature.id,
            "Creating task"
        );

        let task = self
            .store
            .create_task(id, now, &params)
            .await
            .map_err(ServiceError::storage("create task"))?;

        info!(task_id = %task.id, feature_id = %task.feature_id, "Task created");
        Ok(task)
    }

    pub async fn list_tasks(&self) -> ServiceResult<Vec<Task>> {
        let tasks = self
            .store
            .list_tasks()
            .await
            .map_err(ServiceError::storage("list tasks"))?;

        debug!(count = tasks.len(), "Listed tasks");
        Ok(tasks)
    }

    /// Applies `params` to an existing task and bumps `updated_at`.
    pub async fn update_task(&self, params: UpdateTaskParams) -> ServiceResult<Task> {
        let task = self
            .store
            .update_task(&params, Utc::now())
            .await
            .map_err(ServiceError::storage("update task"))?;

        info!(task_id = %task.id, "Task updated");
        Ok(task)
    }

    /// Deletes by id. An unknown id is not an error.
    pub async fn delete_task(&self, id: Uuid) -> ServiceResult<()> {
        let removed = self
            .store
            .delete_task(id)
            .await
            .map_err(ServiceError::storage("delete task"))?;

        if removed == 0 {
            debug!(task_id = %id, "Delete matched no task");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureService;
    use crate::test_support::{feature, task_from, MockFeatureStore, MockTaskStore};
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;
    use serde_json::value::RawValue;
    use worktrack_core::{FeatureRef, Field};
    use worktrack_storage::StorageError;

    fn service(store: MockTaskStore) -> TaskService {
        TaskService::new(Arc::new(store))
    }

    fn reference(name: &str) -> FeatureRef {
        FeatureRef {
            id: Uuid::new_v4(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_task_stamps_id_and_keeps_feature_snapshot() {
        let mut store = MockTaskStore::new();
        store
            .expect_create_task()
            .returning(|id, now, params| Ok(task_from(id, now, params)));

        let login = reference("Login");
        let mut params = CreateTaskParams::new("Write form", login.clone());
        params.git_data =
            Field::Present(RawValue::from_string(r#"{"sha":"abc"}"#.to_string()).unwrap());

        let task = service(store).create_task(params).await.unwrap();

        assert_ne!(task.id, Uuid::nil());
        assert_eq!(task.feature_id, login.id);
        assert_eq!(task.feature_name.as_deref(), Some("Login"));
        assert_eq!(task.created_at, task.updated_at);
        assert_eq!(task.git_data.unwrap().get(), r#"{"sha":"abc"}"#);
    }

    #[tokio::test]
    async fn test_create_task_wraps_storage_failure() {
        let mut store = MockTaskStore::new();
        store
            .expect_create_task()
            .returning(|_, _, _| Err(StorageError::Sqlx(sqlx::Error::PoolClosed)));

        let err = service(store)
            .create_task(CreateTaskParams::new("Write form", reference("Login")))
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("failed to create task"));
    }

    #[tokio::test]
    async fn test_resolved_reference_flows_into_task_params() {
        let feature_id = Uuid::new_v4();
        let mut features = MockFeatureStore::new();
        features
            .expect_get_feature()
            .with(eq(feature_id))
            .returning(|id| Ok(feature(id, "Login")));
        let features = FeatureService::new(Arc::new(features));

        let mut tasks = MockTaskStore::new();
        tasks
            .expect_create_task()
            .withf(move |_, _, params| {
                params.feature.id == feature_id && params.feature.name == "Login"
            })
            .returning(|id, now, params| Ok(task_from(id, now, params)));

        let resolved = features.resolve_reference(feature_id).await.unwrap();
        let task = service(tasks)
            .create_task(CreateTaskParams::new("Write form", resolved))
            .await
            .unwrap();

        assert_eq!(task.feature_name.as_deref(), Some("Login"));
    }

    #[tokio::test]
    async fn test_update_task_forwards_params() {
        let id = Uuid::new_v4();
        let billing = reference("Billing");
        let expected = billing.clone();
        let mut store = MockTaskStore::new();
        store
            .expect_update_task()
            .withf(move |params, _| {
                params.id == id && params.feature == Field::Present(expected.clone())
            })
            .returning(|params, updated_at| {
                let feature = params.feature.as_option().cloned().unwrap();
                let mut task = task_from(
                    params.id,
                    updated_at,
                    &CreateTaskParams::new("Write form", feature),
                );
                task.updated_at = updated_at;
                Ok(task)
            });

        let mut params = UpdateTaskParams::new(id);
        params.feature = Field::Present(billing);
        let task = service(store).update_task(params).await.unwrap();

        assert_eq!(task.feature_name.as_deref(), Some("Billing"));
    }

    #[tokio::test]
    async fn test_update_unknown_task_is_not_found() {
        let mut store = MockTaskStore::new();
        store
            .expect_update_task()
            .returning(|_, _| Err(StorageError::NotFound));

        let err = service(store)
            .update_task(UpdateTaskParams::new(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_tasks_returns_store_order() {
        let mut store = MockTaskStore::new();
        store.expect_list_tasks().returning(|| {
            let now = Utc::now();
            Ok(vec![
                task_from(Uuid::new_v4(), now, &CreateTaskParams::new("One", reference("A"))),
                task_from(Uuid::new_v4(), now, &CreateTaskParams::new("Two", reference("B"))),
            ])
        });

        let names: Vec<String> = service(store)
            .list_tasks()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["One", "Two"]);
    }

    #[tokio::test]
    async fn test_delete_task_failure_is_wrapped() {
        let mut store = MockTaskStore::new();
        store
            .expect_delete_task()
            .returning(|_| Err(StorageError::Sqlx(sqlx::Error::PoolClosed)));

        let err = service(store).delete_task(Uuid::new_v4()).await.unwrap_err();
        assert!(err.to_string().starts_with("failed to delete task"));
    }

    #[tokio::test]
    async fn test_delete_unknown_task_succeeds() {
        let mut store = MockTaskStore::new();
        store.expect_delete_task().returning(|_| Ok(0));

        assert!(service(store).delete_task(Uuid::new_v4()).await.is_ok());
    }
}
