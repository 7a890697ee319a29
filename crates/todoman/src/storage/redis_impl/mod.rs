//! Redis storage backend implementation.
//!
//! Maps lists and items onto plain Redis keys per the schema in
//! `todoman_core::storage::keys`, using INCR for id allocation and a hash
//! per list for its items.

mod error;
mod store;

pub use store::RedisListStore;
