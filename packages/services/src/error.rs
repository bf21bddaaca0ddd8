// ABOUTME: Service-layer error type
// ABOUTME: Wraps storage failures with the name of the action that failed

use thiserror::Error;
use worktrack_storage::StorageError;

/// Service-layer failures, carrying the action that failed
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("failed to {action}: {source}")]
    Storage {
        action: &'static str,
        #[source]
        source: StorageError,
    },
}

impl ServiceError {
    pub(crate) fn storage(action: &'static str) -> impl FnOnce(StorageError) -> Self {
        move |source| ServiceError::Storage { action, source }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            ServiceError::Storage { source, .. } => source.is_not_found(),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
