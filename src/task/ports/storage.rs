//! Key-value storage port consumed by the task repository.

use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// String key-value storage contract.
///
/// The contract mirrors browser-style local storage: values are opaque
/// strings, a missing key reads as `None`, and writes replace the previous
/// value. Implementations may refuse writes, for example when a capacity
/// limit is reached.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStorage: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be read.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::QuotaExceeded`] when the backend is full, or
    /// another [`StorageError`] when the write fails.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Arc<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

/// Errors returned by key-value storage implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The write would exceed the backend capacity.
    #[error("storage quota exceeded: {actual_bytes} bytes requested, limit is {limit_bytes}")]
    QuotaExceeded {
        /// Configured capacity in bytes.
        limit_bytes: usize,
        /// Total bytes the write would have required.
        actual_bytes: usize,
    },

    /// The key cannot be represented by the backend.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// Filesystem or other I/O failure.
    #[error("storage i/o error: {0}")]
    Io(Arc<io::Error>),

    /// A lock guarding the backend was poisoned.
    #[error("storage lock poisoned: {0}")]
    Poisoned(String),
}

impl From<io::Error> for StorageError {
    fn from(err: io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}
