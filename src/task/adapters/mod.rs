//! Storage adapters implementing the key-value storage port.
//!
//! - [`memory`]: lock-guarded map with an optional byte capacity
//! - [`file`]: one JSON file per key inside a capability-scoped directory

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::InMemoryStorage;
