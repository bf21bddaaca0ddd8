// ABOUTME: Feature service
// ABOUTME: Generates ids and timestamps for features and resolves task references to them

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use worktrack_core::{CreateFeatureParams, Feature, FeatureRef, UpdateFeatureParams};
use worktrack_storage::FeatureStore;

use crate::error::{ServiceError, ServiceResult};

pub struct FeatureService {
    store: Arc<dyn FeatureStore>,
}

impl FeatureService {
    pub fn new(store: Arc<dyn FeatureStore>) -> Self {
        Self { store }
    }

    /// Stores a new feature under a fresh random id, with both timestamps set to now.
    pub async fn create_feature(&self, params: CreateFeatureParams) -> ServiceResult<Feature> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let feature = self
            .store
            .create_feature(id, now, &params)
            .await
            .map_err(ServiceError::storage("create feature"))?;

        info!(feature_id = %feature.id, "Feature created");
        Ok(feature)
    }

    pub async fn list_features(&self) -> ServiceResult<Vec<Feature>> {
        self.store
            .list_features()
            .await
            .map_err(ServiceError::storage("list features"))
    }

    /// Applies `params` to an existing feature and bumps `updated_at`.
    pub async fn update_feature(&self, params: UpdateFeatureParams) -> ServiceResult<Feature> {
        let feature = self
            .store
            .update_feature(&params, Utc::now())
            .await
            .map_err(ServiceError::storage("update feature"))?;

        info!(feature_id = %feature.id, "Feature updated");
        Ok(feature)
    }

    /// Deletes by id. An unknown id is not an error.
    pub async fn delete_feature(&self, id: Uuid) -> ServiceResult<()> {
        let removed = self
            .store
            .delete_feature(id)
            .await
            .map_err(ServiceError::storage("delete feature"))?;

        if removed == 0 {
            debug!(feature_id = %id, "Delete matched no feature");
        }
        Ok(())
    }

    pub async fn get_feature(&self, id: Uuid) -> ServiceResult<Feature> {
        self.store
            .get_feature(id)
            .await
            .map_err(ServiceError::storage("get feature"))
    }

    /// Looks up the feature a task is about to reference and snapshots its name.
    pub async fn resolve_reference(&self, id: Uuid) -> ServiceResult<FeatureRef> {
        let feature = self.get_feature(id).await?;
        debug!(feature_id = %id, feature_name = %feature.name, "Resolved feature reference");
        Ok(FeatureRef::from(feature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{feature, MockFeatureStore};
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;
    use worktrack_core::Field;
    use worktrack_storage::StorageError;

    fn service(store: MockFeatureStore) -> FeatureService {
        FeatureService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_create_feature_stamps_fresh_id_and_equal_timestamps() {
        let mut store = MockFeatureStore::new();
        store
            .expect_create_feature()
            .times(2)
            .returning(|id, now, params| {
                let mut created = feature(id, &params.name);
                created.created_at = now;
                created.updated_at = now;
                Ok(created)
            });
        let service = service(store);

        let params = CreateFeatureParams {
            name: "Login".to_string(),
            ..Default::default()
        };
        let first = service.create_feature(params.clone()).await.unwrap();
        let second = service.create_feature(params).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.created_at, first.updated_at);
        assert_eq!(first.name, "Login");
    }

    #[tokio::test]
    async fn test_create_feature_passes_optional_fields_through() {
        let creator = Uuid::new_v4();
        let mut store = MockFeatureStore::new();
        store
            .expect_create_feature()
            .withf(move |_, _, params| {
                params.created_by == Field::Present(creator)
                    && params.status == Field::Present("open".to_string())
                    && params.description.is_absent()
            })
            .returning(|id, _, params| Ok(feature(id, &params.name)));

        let params = CreateFeatureParams {
            name: "Login".to_string(),
            created_by: Field::Present(creator),
            status: Field::Present("open".to_string()),
            ..Default::default()
        };
        assert!(service(store).create_feature(params).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_feature_wraps_storage_failure() {
        let mut store = MockFeatureStore::new();
        store
            .expect_create_feature()
            .returning(|_, _, _| Err(StorageError::Sqlx(sqlx::Error::PoolClosed)));

        let err = service(store)
            .create_feature(CreateFeatureParams::default())
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("failed to create feature"));
    }

    #[tokio::test]
    async fn test_update_feature_bumps_updated_at() {
        let id = Uuid::new_v4();
        let before = Utc::now();
        let mut store = MockFeatureStore::new();
        store
            .expect_update_feature()
            .withf(move |params, updated_at| params.id == id && *updated_at >= before)
            .returning(|params, updated_at| {
                let mut updated = feature(params.id, "Login");
                updated.updated_at = updated_at;
                Ok(updated)
            });

        let updated = service(store)
            .update_feature(UpdateFeatureParams::new(id))
            .await
            .unwrap();
        assert!(updated.updated_at >= before);
    }

    #[tokio::test]
    async fn test_update_unknown_feature_is_not_found() {
        let mut store = MockFeatureStore::new();
        store
            .expect_update_feature()
            .returning(|_, _| Err(StorageError::NotFound));

        let err = service(store)
            .update_feature(UpdateFeatureParams::new(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_unknown_feature_succeeds() {
        let id = Uuid::new_v4();
        let mut store = MockFeatureStore::new();
        store
            .expect_delete_feature()
            .with(eq(id))
            .returning(|_| Ok(0));

        assert!(service(store).delete_feature(id).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_features_wraps_storage_failure() {
        let mut store = MockFeatureStore::new();
        store
            .expect_list_features()
            .returning(|| Err(StorageError::Sqlx(sqlx::Error::PoolClosed)));

        let err = service(store).list_features().await.unwrap_err();
        assert!(err.to_string().starts_with("failed to list features: Sqlx error"));
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn test_resolve_reference_snapshots_current_name() {
        let id = Uuid::new_v4();
        let mut store = MockFeatureStore::new();
        store
            .expect_get_feature()
            .with(eq(id))
            .returning(|id| Ok(feature(id, "Login")));

        let reference = service(store).resolve_reference(id).await.unwrap();
        assert_eq!(reference, FeatureRef { id, name: "Login".to_string() });
    }

    #[tokio::test]
    async fn test_resolve_reference_to_missing_feature_fails() {
        let mut store = MockFeatureStore::new();
        store
            .expect_get_feature()
            .returning(|_| Err(StorageError::NotFound));

        let err = service(store)
            .resolve_reference(Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("failed to get feature"));
    }
}
