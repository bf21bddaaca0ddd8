// ABOUTME: Core types for Worktrack
// ABOUTME: Stored records, write parameters, and presence-tracking optional fields

pub mod field;
pub mod types;

pub use field::Field;
pub use types::{
    CreateFeatureParams, CreateTaskParams, Feature, FeatureRef, GitData, Task,
    UpdateFeatureParams, UpdateTaskParams,
};
