use serde::{Deserialize, Serialize};

/// A named TODO list. Items are stored separately and fetched on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// Positive integer id, allocated by the store and immutable thereafter.
    pub id: i64,
    pub title: String,
}

impl TodoList {
    /// Creates a list with the given id and title.
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// A single entry of a TODO list.
///
/// The id is unique within the owning list only; two different lists may
/// each hold an item with id `1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoListItem {
    pub id: i64,
    pub description: String,
}

impl TodoListItem {
    /// Creates an item with the given id and description.
    pub fn new(id: i64, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }
}

/// A TODO list together with all of its items.
///
/// Item order is unspecified: the backing collection is an unordered
/// field-to-value map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoListWithItems {
    pub id: i64,
    pub title: String,
    pub items: Vec<TodoListItem>,
}

impl TodoListWithItems {
    /// Assembles a list from its title record and item collection.
    pub fn new(id: i64, title: impl Into<String>, items: Vec<TodoListItem>) -> Self {
        Self {
            id,
            title: title.into(),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_list_serializes_to_json() {
        let list = TodoList::new(123, "Shopping List");
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json, serde_json::json!({"id": 123, "title": "Shopping List"}));
    }

    #[test]
    fn test_todo_list_with_items_round_trips() {
        let list = TodoListWithItems::new(
            123,
            "Household chores",
            vec![
                TodoListItem::new(1, "Buy milk"),
                TodoListItem::new(2, "Mop floor"),
            ],
        );
        let json = serde_json::to_string(&list).unwrap();
        let back: TodoListWithItems = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
