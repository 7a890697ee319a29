//! Redis error mapping to StorageError.

use todoman_core::storage::StorageError;

/// Maps Redis errors to StorageError.
pub fn map_redis_error(err: redis::RedisError) -> StorageError {
    if err.is_connection_refusal() || err.is_timeout() || err.is_connection_dropped() {
        StorageError::ConnectionFailed(err.to_string())
    } else {
        StorageError::OperationFailed(err.to_string())
    }
}
