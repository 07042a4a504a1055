//! Storage error types.

use thiserror::Error;

/// Failures raised by the in-memory store itself.
///
/// A missing record is not an error at this layer; lookups return
/// `Option` and deletes return whether anything was removed.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
