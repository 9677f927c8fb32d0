use std::path::PathBuf;

use thiserror::Error;

use crate::VersionId;

/// Result type for version history operations
pub type Result<T> = std::result::Result<T, HistoryError>;

/// Result type for [`VersionStore`](crate::VersionStore) implementations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failures reported by a persistence backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("version {version_number} of project '{project_id}' already exists")]
    Conflict {
        project_id: String,
        version_number: u32,
    },

    #[error("no version with id {0}")]
    Missing(VersionId),

    #[error("failed to access version store '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("version store '{path}' is not valid JSON")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Backend(String),
}

/// Errors surfaced to callers of [`VersionService`](crate::VersionService).
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Any persistence failure, carrying the backend's message.
    #[error("failed to {operation}: {message}")]
    Storage {
        operation: &'static str,
        message: String,
        #[source]
        source: StoreError,
    },

    #[error("version {0} not found")]
    NotFound(VersionId),

    #[error("{0}")]
    Validation(String),
}

impl HistoryError {
    pub(crate) fn storage(operation: &'static str, source: StoreError) -> Self {
        HistoryError::Storage {
            operation,
            message: source.to_string(),
            source,
        }
    }

    /// Whether this error means the requested version does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            HistoryError::NotFound(_)
                | HistoryError::Storage {
                    source: StoreError::Missing(_),
                    ..
                }
        )
    }
}
