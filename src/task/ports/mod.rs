//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod storage;

pub use storage::{KeyValueStorage, StorageError, StorageResult};

#[cfg(test)]
pub use storage::MockKeyValueStorage;
