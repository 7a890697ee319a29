//! Key-schema helpers for the flat key-value layout.
//!
//! Pure functions deriving store keys from list ids. All functions are sync
//! and have no side effects. The schema is fixed and must not change: data
//! written by existing deployments lives under these exact keys.
//!
//! | Key                       | Type    | Meaning                         |
//! |---------------------------|---------|---------------------------------|
//! | `list_last_id`            | counter | global list-id sequence         |
//! | `list:<id>:title`         | string  | list title                      |
//! | `list:<id>:item_last_id`  | counter | per-list item-id sequence       |
//! | `list:<id>:items`         | hash    | field = item id, value = text   |

/// Key of the global counter used to allocate list ids.
pub fn list_last_id_key() -> &'static str {
    "list_last_id"
}

/// Key holding the title of a list. Presence of this key defines the
/// existence of the list.
pub fn title_key(list_id: i64) -> String {
    format!("list:{list_id}:title")
}

/// Key of the per-list counter used to allocate item ids.
pub fn item_last_id_key(list_id: i64) -> String {
    format!("list:{list_id}:item_last_id")
}

/// Key of the hash holding a list's items (field = item id, value =
/// description).
pub fn items_key(list_id: i64) -> String {
    format!("list:{list_id}:items")
}

/// Glob pattern matching every title key, used to enumerate all lists.
pub fn title_key_pattern() -> &'static str {
    "list:*:title"
}

/// Extracts the list id embedded in a title key.
///
/// Inverse of [`title_key`]; returns `None` for keys outside the schema.
///
/// # Examples
///
/// ```
/// use todoman_core::storage::keys::extract_list_id;
///
/// assert_eq!(extract_list_id("list:42:title"), Some(42));
/// assert_eq!(extract_list_id("list:42:items"), None);
/// assert_eq!(extract_list_id("session:42:title"), None);
/// ```
pub fn extract_list_id(key: &str) -> Option<i64> {
    let rest = key.strip_prefix("list:")?;
    let id_part = rest.strip_suffix(":title")?;
    id_part.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_key() {
        assert_eq!(title_key(123), "list:123:title");
    }

    #[test]
    fn test_item_last_id_key() {
        assert_eq!(item_last_id_key(123), "list:123:item_last_id");
    }

    #[test]
    fn test_items_key() {
        assert_eq!(items_key(123), "list:123:items");
    }

    #[test]
    fn test_counter_and_pattern_keys() {
        assert_eq!(list_last_id_key(), "list_last_id");
        assert_eq!(title_key_pattern(), "list:*:title");
    }

    #[test]
    fn test_extract_list_id_round_trips() {
        for id in [1, 42, 9_999_999] {
            assert_eq!(extract_list_id(&title_key(id)), Some(id));
        }
    }

    #[test]
    fn test_extract_list_id_rejects_foreign_keys() {
        assert_eq!(extract_list_id("list_last_id"), None);
        assert_eq!(extract_list_id("list:7:item_last_id"), None);
        assert_eq!(extract_list_id("list:abc:title"), None);
        assert_eq!(extract_list_id("title"), None);
    }
}
