use thiserror::Error;

/// Errors that can occur during list-store operations.
///
/// Writes are deliberately permissive (no existence checks, see the trait
/// docs), so `NotFound` only ever comes out of reads. Composite operations
/// that fail midway surface the error of the sub-operation that failed;
/// partial completion is not detected or rolled back at this layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Operation failed: {0}")]
    OperationFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for list-store operations.
pub type Result<T> = std::result::Result<T, StorageError>;
