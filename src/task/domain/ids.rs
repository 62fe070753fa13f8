//! Task identifiers and the identifier generation capability.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque unique identifier for a task.
///
/// Identifiers are plain strings on the wire. The domain never inspects
/// their contents, so identifiers produced by other writers of the same
/// storage key round-trip untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Wraps an existing identifier value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Capability that mints identifiers for newly created tasks.
///
/// Production code uses [`UuidIdGenerator`]; tests inject deterministic
/// generators so created tasks have predictable identifiers.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier that is unique for the task collection.
    fn next_id(&self) -> TaskId;
}

/// Generates random version 4 UUIDs rendered in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> TaskId {
        TaskId(Uuid::new_v4().to_string())
    }
}
