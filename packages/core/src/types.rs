// ABOUTME: Feature and task type definitions
// ABOUTME: Stored records plus the parameter sets used to create and update them

use chrono::{DateTime, Utc};
use serde_json::value::RawValue;
use uuid::Uuid;

use crate::field::Field;

/// Opaque structured payload attached to a task. Never parsed, only carried.
pub type GitData = Box<RawValue>;

/// A feature as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_by: Option<Uuid>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A task as stored.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_by: Option<Uuid>,
    pub feature_id: Uuid,
    /// Name of the referenced feature at the time the reference was last set
    pub feature_name: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub git_data: Option<GitData>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Snapshot of a feature taken when a task's reference to it is set.
///
/// Task parameters hold a `FeatureRef` rather than a bare id, so a task can only be
/// written after its feature has been looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRef {
    pub id: Uuid,
    pub name: String,
}

impl From<&Feature> for FeatureRef {
    fn from(feature: &Feature) -> Self {
        Self {
            id: feature.id,
            name: feature.name.clone(),
        }
    }
}

impl From<Feature> for FeatureRef {
    fn from(feature: Feature) -> Self {
        Self {
            id: feature.id,
            name: feature.name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateFeatureParams {
    pub name: String,
    pub description: Field<String>,
    pub created_by: Field<Uuid>,
    pub priority: Field<String>,
    pub status: Field<String>,
}

/// Replacement values for an existing feature.
///
/// Every column is overwritten: `name` with its value (possibly empty), absent optional
/// fields with `NULL`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateFeatureParams {
    pub id: Uuid,
    pub name: String,
    pub description: Field<String>,
    pub priority: Field<String>,
    pub status: Field<String>,
}

impl UpdateFeatureParams {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            name: String::new(),
            description: Field::Absent,
            priority: Field::Absent,
            status: Field::Absent,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTaskParams {
    pub name: String,
    pub description: Field<String>,
    pub created_by: Field<Uuid>,
    pub feature: FeatureRef,
    pub priority: Field<String>,
    pub status: Field<String>,
    pub git_data: Field<GitData>,
}

impl CreateTaskParams {
    pub fn new(name: impl Into<String>, feature: FeatureRef) -> Self {
        Self {
            name: name.into(),
            description: Field::Absent,
            created_by: Field::Absent,
            feature,
            priority: Field::Absent,
            status: Field::Absent,
            git_data: Field::Absent,
        }
    }
}

/// Replacement values for an existing task.
///
/// `name` and `feature` keep their stored values when absent. A present `feature`
/// rewrites both the reference and the cached feature name. Every other absent field
/// is cleared.
#[derive(Debug, Clone)]
pub struct UpdateTaskParams {
    pub id: Uuid,
    pub name: Field<String>,
    pub description: Field<String>,
    pub feature: Field<FeatureRef>,
    pub priority: Field<String>,
    pub status: Field<String>,
    pub git_data: Field<GitData>,
}

impl UpdateTaskParams {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            name: Field::Absent,
            description: Field::Absent,
            feature: Field::Absent,
            priority: Field::Absent,
            status: Field::Absent,
            git_data: Field::Absent,
        }
    }
}
