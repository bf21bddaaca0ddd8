// ABOUTME: Task storage layer using SQLite
// ABOUTME: Parameterized CRUD statements for the tasks table, including the cached feature name

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::value::RawValue;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use worktrack_core::{CreateTaskParams, Field, Task, UpdateTaskParams};

use crate::{StorageError, StorageResult, TaskStore};

const TASK_COLUMNS: &str = "id, name, description, created_by, feature_id, feature_name, \
                            priority, status, git_data, created_at, updated_at";

pub struct SqliteTaskStore {
    pool: SqlitePool,
}

impl SqliteTaskStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_task(row: &SqliteRow) -> StorageResult<Task> {
        let git_data = row
            .try_get::<Option<String>, _>("git_data")?
            .map(RawValue::from_string)
            .transpose()?;

        Ok(Task {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            created_by: row.try_get("created_by")?,
            feature_id: row.try_get("feature_id")?,
            feature_name: row.try_get("feature_name")?,
            priority: row.try_get("priority")?,
            status: row.try_get("status")?,
            git_data,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn create_task(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
        params: &CreateTaskParams,
    ) -> StorageResult<Task> {
        debug!(task_id = %id, feature_id = %params.feature.id, "Inserting task");

        sqlx::query(
            r#"
            INSERT INTO tasks (
                id, name, description, created_by, feature_id, feature_name,
                priority, status, git_data, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&params.name)
        .bind(params.description.as_deref())
        .bind(params.created_by.as_option().copied())
        .bind(params.feature.id)
        .bind(&params.feature.name)
        .bind(params.priority.as_deref())
        .bind(params.status.as_deref())
        .bind(params.git_data.as_option().map(|raw| raw.get()))
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.get_task(id).await
    }

    async fn get_task(&self, id: Uuid) -> StorageResult<Task> {
        debug!(task_id = %id, "Fetching task");

        let row = sqlx::query(&format!("SELECT {} FROM tasks WHERE id = ?", TASK_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Self::row_to_task(&row)
    }

    async fn list_tasks(&self) -> StorageResult<Vec<Task>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM tasks ORDER BY created_at, id",
            TASK_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Fetched tasks");

        rows.iter().map(Self::row_to_task).collect()
    }

    async fn update_task(
        &self,
        params: &UpdateTaskParams,
        updated_at: DateTime<Utc>,
    ) -> StorageResult<Task> {
        debug!(task_id = %params.id, "Updating task");

        // Optional columns are always written, so absent values clear them.
        // The feature reference and its cached name only move together.
        let mut query = String::from(
            "UPDATE tasks SET name = COALESCE(?, name), description = ?, priority = ?, \
             status = ?, git_data = ?, updated_at = ?",
        );
        if params.feature.is_present() {
            query.push_str(", feature_id = ?, feature_name = ?");
        }
        query.push_str(" WHERE id = ?");

        let mut q = sqlx::query(&query)
            .bind(params.name.as_deref())
            .bind(params.description.as_deref())
            .bind(params.priority.as_deref())
            .bind(params.status.as_deref())
            .bind(params.git_data.as_option().map(|raw| raw.get()))
            .bind(updated_at);

        if let Field::Present(feature) = &params.feature {
            q = q.bind(feature.id).bind(&feature.name);
        }

        let result = q.bind(params.id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.get_task(params.id).await
    }

    async fn delete_task(&self, id: Uuid) -> StorageResult<u64> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(task_id = %id, rows = result.rows_affected(), "Deleted task");

        Ok(result.rows_affected())
    }
}
