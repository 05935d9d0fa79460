//! Key-value storage capability behind the availability store.

use std::fmt;

/// Failure inside the persistence layer.
///
/// Never escapes [`super::AvailabilityStore`]; it is logged and degraded to
/// an empty read or a dropped write.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem failure (permissions, disk full, ...).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value is not a valid override map.
    #[error("malformed stored data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Backend refused the operation (disabled, invalid key, poisoned lock).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable string key-value store, the local-device equivalent of browser
/// storage.
///
/// Implementations must be safe to share across threads; the availability
/// store serializes its own read-modify-write cycles.
pub trait KeyValueBackend: Send + Sync + fmt::Debug {
    /// Returns the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the value cannot be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
