//! In-memory storage backend implementation.
//!
//! Keeps the whole key space in process memory for tests and local
//! development, mirroring the Redis backend's behavior key for key.

mod store;

pub use store::MemoryListStore;
