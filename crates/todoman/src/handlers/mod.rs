pub mod error;
pub mod health;
pub mod items;
pub mod lists;

use todoman_core::storage::StorageError;

use crate::state::AppState;
use error::AppError;

/// Existence guard shared by every handler that takes a list id.
///
/// The store itself never rejects writes against a missing list, so 404
/// semantics are produced here, before the operation runs.
pub(crate) async fn ensure_list_exists(state: &AppState, list_id: i64) -> Result<(), AppError> {
    if !state.store.exists(list_id).await? {
        return Err(StorageError::NotFound {
            entity_type: "TodoList",
            id: list_id.to_string(),
        }
        .into());
    }
    Ok(())
}
