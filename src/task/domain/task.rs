//! Task record and its creation rules.

use super::{IdGenerator, TaskId, TaskTitleError, UuidIdGenerator, validate_task_title};
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use serde::Serialize;

/// A single to-do item.
///
/// Serialized with camelCase keys (`id`, `title`, `completed`, `createdAt`,
/// `updatedAt`), which is the shape persisted under the tasks storage key.
/// Stored records are read back through [`Task::from_persisted`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    ///
    /// No title validation is applied; stored records are accepted on shape
    /// alone.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            completed: data.completed,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub(super) fn with_title(&self, title: String, clock: &impl Clock) -> Self {
        Self {
            title,
            updated_at: clock.utc(),
            ..self.clone()
        }
    }

    pub(super) fn with_completion_toggled(&self, clock: &impl Clock) -> Self {
        Self {
            completed: !self.completed,
            updated_at: clock.utc(),
            ..self.clone()
        }
    }
}

/// Creates a new task from raw title input.
///
/// The identifier comes from `ids` and both timestamps from a single
/// `clock.utc()` reading, so `created_at == updated_at`.
///
/// # Errors
///
/// Returns the [`TaskTitleError`] produced by [`validate_task_title`]
/// unchanged.
pub fn create_task(
    input: &str,
    clock: &impl Clock,
    ids: &impl IdGenerator,
) -> Result<Task, TaskTitleError> {
    let title = validate_task_title(input)?;
    let timestamp = clock.utc();

    Ok(Task {
        id: ids.next_id(),
        title,
        completed: false,
        created_at: timestamp,
        updated_at: timestamp,
    })
}

/// Creates a new task using the wall clock and random UUID identifiers.
///
/// # Errors
///
/// Returns the [`TaskTitleError`] produced by [`validate_task_title`].
pub fn create_task_now(input: &str) -> Result<Task, TaskTitleError> {
    create_task(input, &DefaultClock, &UuidIdGenerator)
}
