//! Application state with store-based storage.
//!
//! The shared state passed to all request handlers. It holds the list store
//! as a trait object so handlers never know which backend is compiled in,
//! and so tests can inject a double.

use std::sync::Arc;

use todoman_core::storage::ListStore;

/// Shared application state.
///
/// Cloned for each request handler; the store itself is a single long-lived
/// shared handle.
#[derive(Clone)]
pub struct AppState {
    /// List store backend (Redis or in-memory, selected by feature flag).
    pub store: Arc<dyn ListStore>,
}

impl AppState {
    /// Creates state around an already-constructed store.
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }

    /// Creates state backed by the in-memory store.
    #[cfg(feature = "memory")]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(crate::storage::MemoryListStore::new()))
    }

    /// Creates state backed by Redis, connecting with the configured URL.
    #[cfg(feature = "redis")]
    pub async fn connect(config: &crate::config::Config) -> anyhow::Result<Self> {
        let store = crate::storage::RedisListStore::new(&config.redis_url).await?;
        Ok(Self::new(Arc::new(store)))
    }
}
