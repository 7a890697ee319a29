//! Pure functions for mapping storage errors to HTTP status codes.
//!
//! Status mapping lives here so the HTTP layer stays a thin translation;
//! following the Functional Core pattern, these are pure functions with no
//! side effects.

use super::StorageError;

/// Maps a [`StorageError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `OperationFailed` -> 500 (Internal Server Error)
/// - `InvalidData` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use todoman_core::storage::{StorageError, storage_error_to_status_code};
///
/// let error = StorageError::NotFound {
///     entity_type: "TodoList",
///     id: "42".to_string(),
/// };
/// assert_eq!(storage_error_to_status_code(&error), 404);
/// ```
pub fn storage_error_to_status_code(error: &StorageError) -> u16 {
    match error {
        StorageError::NotFound { .. } => 404,
        StorageError::ConnectionFailed(_) => 503,
        StorageError::OperationFailed(_) => 500,
        StorageError::InvalidData(_) => 500,
    }
}
