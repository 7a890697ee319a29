//! API request types for TODO list operations.
//!
//! These types are the boundary between the HTTP layer and the domain:
//! length validation happens here, before anything reaches the store.
//! Following the Functional Core pattern, these are pure data types with no I/O.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::types::{TodoList, TodoListItem};

/// Title and description length bounds, in characters.
const MIN_LEN: usize = 3;
const MAX_LEN: usize = 200;

fn validate_length(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < MIN_LEN || len > MAX_LEN {
        return Err(ValidationError::LengthOutOfRange {
            field,
            min: MIN_LEN,
            max: MAX_LEN,
            len,
        });
    }
    Ok(())
}

/// Request payload for creating or renaming a TODO list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoListRequest {
    pub title: String,
}

impl CreateTodoListRequest {
    /// Create a new request with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Checks the title length bound.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_length("title", &self.title)
    }

    /// Convert into a `TodoList` with the given id.
    pub fn into_list(self, id: i64) -> TodoList {
        TodoList::new(id, self.title)
    }
}

/// Request payload for adding an item to a TODO list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoItemRequest {
    pub description: String,
}

impl CreateTodoItemRequest {
    /// Create a new request with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Checks the description length bound.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_length("description", &self.description)
    }

    /// Convert into a `TodoListItem` with the given id.
    pub fn into_item(self, id: i64) -> TodoListItem {
        TodoListItem::new(id, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_title_passes() {
        assert!(CreateTodoListRequest::new("Shopping List").validate().is_ok());
    }

    #[test]
    fn test_short_title_rejected() {
        let err = CreateTodoListRequest::new("ab").validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::LengthOutOfRange {
                field: "title",
                min: 3,
                max: 200,
                len: 2,
            }
        );
    }

    #[test]
    fn test_long_description_rejected() {
        let description = "x".repeat(201);
        assert!(CreateTodoItemRequest::new(description).validate().is_err());
    }

    #[test]
    fn test_boundary_lengths_accepted() {
        assert!(CreateTodoListRequest::new("abc").validate().is_ok());
        assert!(CreateTodoListRequest::new("x".repeat(200)).validate().is_ok());
    }

    #[test]
    fn test_into_list_carries_id() {
        let list = CreateTodoListRequest::new("Groceries").into_list(7);
        assert_eq!(list, TodoList::new(7, "Groceries"));
    }
}
