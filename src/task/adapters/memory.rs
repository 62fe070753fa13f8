//! In-memory key-value storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::ports::{KeyValueStorage, StorageError, StorageResult};

/// Thread-safe in-memory key-value storage.
///
/// Clones share the same underlying map. An optional capacity bounds the
/// total size of stored keys and values in bytes, which lets callers
/// reproduce quota failures of real storage backends.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
    capacity_bytes: Option<usize>,
}

impl InMemoryStorage {
    /// Creates empty, unbounded storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates empty storage that refuses writes beyond `capacity_bytes`.
    #[must_use]
    pub fn with_capacity(capacity_bytes: usize) -> Self {
        Self {
            entries: Arc::default(),
            capacity_bytes: Some(capacity_bytes),
        }
    }

    /// Creates unbounded storage pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(map)),
            capacity_bytes: None,
        }
    }
}

fn poisoned(err: impl std::fmt::Display) -> StorageError {
    StorageError::Poisoned(err.to_string())
}

/// Bytes held by all entries once `key` maps to `value`.
fn size_after_write(entries: &HashMap<String, String>, key: &str, value: &str) -> usize {
    entries
        .iter()
        .filter(|(existing, _)| existing.as_str() != key)
        .map(|(existing, stored)| existing.len() + stored.len())
        .sum::<usize>()
        + key.len()
        + value.len()
}

impl KeyValueStorage for InMemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        if let Some(limit_bytes) = self.capacity_bytes {
            let actual_bytes = size_after_write(&entries, key, value);
            if actual_bytes > limit_bytes {
                return Err(StorageError::QuotaExceeded {
                    limit_bytes,
                    actual_bytes,
                });
            }
        }

        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
