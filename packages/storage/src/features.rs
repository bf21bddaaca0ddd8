// ABOUTME: Feature storage layer using SQLite
// ABOUTME: Parameterized CRUD statements for the features table

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use worktrack_core::{CreateFeatureParams, Feature, UpdateFeatureParams};

use crate::{FeatureStore, StorageError, StorageResult};

const FEATURE_COLUMNS: &str =
    "id, name, description, created_by, priority, status, created_at, updated_at";

pub struct SqliteFeatureStore {
    pool: SqlitePool,
}

impl SqliteFeatureStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_feature(row: &SqliteRow) -> StorageResult<Feature> {
        Ok(Feature {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            created_by: row.try_get("created_by")?,
            priority: row.try_get("priority")?,
            status: row.try_get("status")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl FeatureStore for SqliteFeatureStore {
    async fn create_feature(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
        params: &CreateFeatureParams,
    ) -> StorageResult<Feature> {
        debug!(feature_id = %id, "Inserting feature");

        sqlx::query(
            r#"
            INSERT INTO features (
                id, name, description, created_by, priority, status, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&params.name)
        .bind(params.description.as_deref())
        .bind(params.created_by.as_option().copied())
        .bind(params.priority.as_deref())
        .bind(params.status.as_deref())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.get_feature(id).await
    }

    async fn get_feature(&self, id: Uuid) -> StorageResult<Feature> {
        debug!(feature_id = %id, "Fetching feature");

        let row = sqlx::query(&format!(
            "SELECT {} FROM features WHERE id = ?",
            FEATURE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Self::row_to_feature(&row)
    }

    async fn list_features(&self) -> StorageResult<Vec<Feature>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM features ORDER BY created_at, id",
            FEATURE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Fetched features");

        rows.iter().map(Self::row_to_feature).collect()
    }

    async fn update_feature(
        &self,
        params: &UpdateFeatureParams,
        updated_at: DateTime<Utc>,
    ) -> StorageResult<Feature> {
        debug!(feature_id = %params.id, "Updating feature");

        let result = sqlx::query(
            r#"
            UPDATE features SET
                name = ?,
                description = ?,
                priority = ?,
                status = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&params.name)
        .bind(params.description.as_deref())
        .bind(params.priority.as_deref())
        .bind(params.status.as_deref())
        .bind(updated_at)
        .bind(params.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.get_feature(params.id).await
    }

    async fn delete_feature(&self, id: Uuid) -> StorageResult<u64> {
        let result = sqlx::query("DELETE FROM features WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(feature_id = %id, rows = result.rows_affected(), "Deleted feature");

        Ok(result.rows_affected())
    }
}
