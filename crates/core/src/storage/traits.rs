use async_trait::async_trait;

use crate::todo::{TodoList, TodoListItem, TodoListWithItems};

use super::Result;

/// Repository for TODO lists and their items, backed by a flat key-value
/// store laid out per [`super::keys`].
///
/// # Existence checks
///
/// Write operations do not verify that the target list exists: `update_list`
/// against an unknown id silently creates a dangling title record, and
/// `add_item` creates an item counter and collection under the missing
/// parent. Callers that want 404 semantics must call [`ListStore::exists`]
/// first; that check is the HTTP layer's responsibility.
///
/// # Consistency
///
/// Id allocation is atomic per counter: concurrent `create_list` or
/// `add_item` calls never observe duplicate ids. Everything else is atomic
/// only at the single-key level. `create_list` (two writes), `delete_list`
/// (one multi-key delete) and `list_with_items` (two reads) have no
/// cross-key isolation, so a concurrent reader can observe a list mid-create
/// or mid-delete. `all_lists` is a one-shot snapshot with no isolation
/// against concurrent mutation.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Returns true iff a title record exists for `list_id`.
    async fn exists(&self, list_id: i64) -> Result<bool>;

    /// Allocates a fresh list id, writes the title record and initializes
    /// the per-list item counter to 0. No items record is created; absence
    /// of the collection is equivalent to "empty".
    async fn create_list(&self, title: &str) -> Result<TodoList>;

    /// Overwrites the title record of `list.id`. Items are untouched.
    async fn update_list(&self, list: &TodoList) -> Result<()>;

    /// Removes the title, item collection and item counter of the list in a
    /// single multi-key deletion, so a crash mid-request is the only source
    /// of partial deletion. Item ids of a deleted list are never reallocated
    /// to it; the global list counter keeps its value, so list ids are never
    /// reused either.
    async fn delete_list(&self, list_id: i64) -> Result<()>;

    /// Allocates the next item id within the list and writes the item into
    /// the collection.
    async fn add_item(&self, list_id: i64, description: &str) -> Result<TodoListItem>;

    /// Deletes the item from the list's collection. No-op when the item or
    /// the list does not exist.
    async fn remove_item(&self, list_id: i64, item_id: i64) -> Result<()>;

    /// Enumerates every list (without items) by scanning the title-key
    /// namespace and fetching titles concurrently. Order is unspecified;
    /// lists created or deleted mid-scan may or may not appear.
    async fn all_lists(&self) -> Result<Vec<TodoList>>;

    /// Fetches a list's title and full item collection. The two reads are
    /// not transactional with each other. Returns `NotFound` when the title
    /// record is absent.
    async fn list_with_items(&self, list_id: i64) -> Result<TodoListWithItems>;
}
