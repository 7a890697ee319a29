//! In-memory list store.
//!
//! Thread-safe test double for the Redis backend, using the same key schema
//! so the scan path (`all_lists`) exercises the exact keys a Redis server
//! would hold. Counters increment under the write lock, which satisfies the
//! allocator contract: concurrent callers never observe the same id.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todoman_core::storage::{keys, ListStore, Result, StorageError};
use todoman_core::todo::{TodoList, TodoListItem, TodoListWithItems};

/// The three Redis key types this schema uses, as plain maps.
#[derive(Debug, Default)]
struct Tables {
    /// String-typed keys (list titles).
    strings: HashMap<String, String>,
    /// Integer counters (`list_last_id` and the per-list item counters).
    counters: HashMap<String, i64>,
    /// Hash-typed keys (item id -> description per list).
    hashes: HashMap<String, HashMap<i64, String>>,
}

impl Tables {
    /// Increments a counter, creating it at 0 first when absent.
    fn next_id(&mut self, counter_key: &str) -> i64 {
        let counter = self.counters.entry(counter_key.to_string()).or_insert(0);
        *counter += 1;
        *counter
    }
}

/// In-memory list store implementation.
///
/// Clones share the underlying tables, matching the shared-connection
/// behavior of the Redis backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryListStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryListStore {
    /// Creates an empty store with all counters at 0.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ListStore for MemoryListStore {
    async fn exists(&self, list_id: i64) -> Result<bool> {
        let tables = self.tables.read().await;
        Ok(tables.strings.contains_key(&keys::title_key(list_id)))
    }

    async fn create_list(&self, title: &str) -> Result<TodoList> {
        let mut tables = self.tables.write().await;
        let id = tables.next_id(keys::list_last_id_key());
        tables.strings.insert(keys::title_key(id), title.to_string());
        tables.counters.insert(keys::item_last_id_key(id), 0);
        // No empty items hash, same as the Redis backend.
        Ok(TodoList::new(id, title))
    }

    async fn update_list(&self, list: &TodoList) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables
            .strings
            .insert(keys::title_key(list.id), list.title.clone());
        Ok(())
    }

    async fn delete_list(&self, list_id: i64) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables.strings.remove(&keys::title_key(list_id));
        tables.hashes.remove(&keys::items_key(list_id));
        tables.counters.remove(&keys::item_last_id_key(list_id));
        Ok(())
    }

    async fn add_item(&self, list_id: i64, description: &str) -> Result<TodoListItem> {
        let mut tables = self.tables.write().await;
        let id = tables.next_id(&keys::item_last_id_key(list_id));
        tables
            .hashes
            .entry(keys::items_key(list_id))
            .or_default()
            .insert(id, description.to_string());
        Ok(TodoListItem::new(id, description))
    }

    async fn remove_item(&self, list_id: i64, item_id: i64) -> Result<()> {
        let mut tables = self.tables.write().await;
        if let Some(items) = tables.hashes.get_mut(&keys::items_key(list_id)) {
            items.remove(&item_id);
        }
        Ok(())
    }

    async fn all_lists(&self) -> Result<Vec<TodoList>> {
        let tables = self.tables.read().await;
        Ok(tables
            .strings
            .iter()
            .filter_map(|(key, title)| {
                keys::extract_list_id(key).map(|id| TodoList::new(id, title.clone()))
            })
            .collect())
    }

    async fn list_with_items(&self, list_id: i64) -> Result<TodoListWithItems> {
        let tables = self.tables.read().await;
        let title = tables
            .strings
            .get(&keys::title_key(list_id))
            .ok_or_else(|| StorageError::NotFound {
                entity_type: "TodoList",
                id: list_id.to_string(),
            })?;

        let items = tables
            .hashes
            .get(&keys::items_key(list_id))
            .map(|items| {
                items
                    .iter()
                    .map(|(&id, description)| TodoListItem::new(id, description.clone()))
                    .collect()
            })
            .unwrap_or_default();

        Ok(TodoListWithItems::new(list_id, title.clone(), items))
    }
}
