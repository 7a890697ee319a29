//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `ListStore` trait
//! defined in `todoman_core::storage`. The implementations are selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `memory` (default): In-memory store using tokio synchronization primitives
//! - `redis`: Redis store using the redis crate
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!(
    "Features 'memory' and 'redis' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!(
    "No storage backend selected. Enable 'memory' or 'redis' feature. \
    Example: cargo build -p todoman --features memory"
);

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

// Re-export the active store implementation
#[cfg(feature = "memory")]
#[allow(unused_imports)]
pub use memory::MemoryListStore;

#[cfg(feature = "redis")]
#[allow(unused_imports)]
pub use redis_impl::RedisListStore;
