// ABOUTME: Entity services sitting between HTTP handlers and the persistence gateway
// ABOUTME: Stamp identifiers and timestamps, resolve feature references, wrap storage failures

pub mod error;
pub mod features;
pub mod health;
pub mod tasks;

#[cfg(test)]
mod test_support;

pub use error::{ServiceError, ServiceResult};
pub use features::FeatureService;
pub use health::HealthCheckService;
pub use tasks::TaskService;
