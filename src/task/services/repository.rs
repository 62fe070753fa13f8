//! Task collection persistence over a key-value storage handle.
//!
//! Stored payloads are treated as untrusted: anything that does not decode
//! into a list of well-formed task records is discarded and reads as an
//! empty collection. Persistence is best-effort, so neither corrupt data
//! nor failed writes surface as errors to the caller.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::task::{
    domain::{PersistedTaskData, Task, TaskId},
    ports::KeyValueStorage,
};

/// Storage key under which the task collection is persisted.
pub const TASKS_STORAGE_KEY: &str = "todo-app.tasks";

/// Errors raised while encoding or decoding a stored task collection.
#[derive(Debug, Error)]
pub enum StoredTasksError {
    /// The payload is not valid JSON or does not match the task list shape.
    #[error("stored tasks do not match the expected shape: {0}")]
    Shape(#[from] serde_json::Error),

    /// A stored timestamp string is not a recognisable date or date-time.
    #[error("stored task {task_id} has an unreadable {field} timestamp: {value:?}")]
    Timestamp {
        /// Identifier of the offending record.
        task_id: TaskId,
        /// Wire name of the timestamp field.
        field: &'static str,
        /// Raw stored value.
        value: String,
    },
}

/// Wire shape of one stored task record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTask {
    id: TaskId,
    title: String,
    completed: bool,
    created_at: String,
    updated_at: String,
}

impl TryFrom<StoredTask> for Task {
    type Error = StoredTasksError;

    fn try_from(stored: StoredTask) -> Result<Self, Self::Error> {
        let created_at = parse_stored_timestamp(&stored, "createdAt", &stored.created_at)?;
        let updated_at = parse_stored_timestamp(&stored, "updatedAt", &stored.updated_at)?;
        Ok(Self::from_persisted(PersistedTaskData {
            id: stored.id,
            title: stored.title,
            completed: stored.completed,
            created_at,
            updated_at,
        }))
    }
}

fn parse_stored_timestamp(
    stored: &StoredTask,
    field: &'static str,
    value: &str,
) -> Result<DateTime<Utc>, StoredTasksError> {
    parse_timestamp(value).ok_or_else(|| StoredTasksError::Timestamp {
        task_id: stored.id.clone(),
        field,
        value: value.to_owned(),
    })
}

/// Parses a stored timestamp.
///
/// Accepts RFC 3339, ISO 8601 date-times without an offset and bare dates.
/// Values without an offset are taken as UTC; bare dates as midnight.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = value.parse::<NaiveDateTime>() {
        return Some(naive.and_utc());
    }
    value
        .parse::<NaiveDate>()
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Decodes a stored payload into a task collection.
///
/// The payload must be a JSON array whose elements each carry a string
/// `id`, string `title`, boolean `completed`, and string `createdAt` and
/// `updatedAt` timestamps. Additional fields on an element are ignored.
///
/// # Errors
///
/// Returns [`StoredTasksError::Shape`] for malformed JSON, a non-array top
/// level, or any element that is missing a field or has a field of the
/// wrong type. Returns [`StoredTasksError::Timestamp`] when a timestamp
/// string is not a date at all.
pub fn decode_tasks(raw: &str) -> Result<Vec<Task>, StoredTasksError> {
    let stored: Vec<StoredTask> = serde_json::from_str(raw)?;
    stored.into_iter().map(Task::try_from).collect()
}

/// Encodes a task collection into its stored JSON form.
///
/// # Errors
///
/// Returns [`StoredTasksError::Shape`] if serialization fails.
pub fn encode_tasks(tasks: &[Task]) -> Result<String, StoredTasksError> {
    Ok(serde_json::to_string(tasks)?)
}

/// Loads and saves task collections through key-value storage.
///
/// The repository keeps no copy of the tasks. It only remembers the default
/// storage handle chosen by the host; each call may override it with an
/// explicit handle.
#[derive(Clone, Default)]
pub struct TaskRepository {
    default_storage: Option<Arc<dyn KeyValueStorage>>,
}

impl std::fmt::Debug for TaskRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskRepository")
            .field("has_default_storage", &self.default_storage.is_some())
            .finish()
    }
}

impl TaskRepository {
    /// Creates a repository that falls back to `default_storage`.
    #[must_use]
    pub fn new(default_storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            default_storage: Some(default_storage),
        }
    }

    /// Creates a repository with no default storage.
    ///
    /// Calls without an explicit handle behave as if storage were
    /// unavailable: loads return nothing and saves do nothing.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            default_storage: None,
        }
    }

    /// Returns whether a default storage handle is configured.
    #[must_use]
    pub const fn has_default_storage(&self) -> bool {
        self.default_storage.is_some()
    }

    fn resolve<'a>(
        &'a self,
        storage: Option<&'a dyn KeyValueStorage>,
    ) -> Option<&'a dyn KeyValueStorage> {
        storage.or(self.default_storage.as_deref())
    }

    /// Loads the persisted task collection.
    ///
    /// Returns an empty collection when storage is unavailable, nothing is
    /// stored, the read fails, or the stored payload is corrupt.
    #[must_use]
    pub fn load(&self, storage: Option<&dyn KeyValueStorage>) -> Vec<Task> {
        let Some(target) = self.resolve(storage) else {
            debug!("task storage unavailable, starting with an empty list");
            return Vec::new();
        };

        let raw = match target.get(TASKS_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(error = %err, key = TASKS_STORAGE_KEY, "failed to read stored tasks");
                return Vec::new();
            }
        };

        match decode_tasks(&raw) {
            Ok(tasks) => {
                debug!(count = tasks.len(), "loaded stored tasks");
                tasks
            }
            Err(err) => {
                warn!(error = %err, key = TASKS_STORAGE_KEY, "discarding stored tasks");
                Vec::new()
            }
        }
    }

    /// Persists `tasks`, replacing the stored collection.
    ///
    /// Does nothing when storage is unavailable. Encoding and write failures
    /// are logged and otherwise ignored.
    pub fn save(&self, tasks: &[Task], storage: Option<&dyn KeyValueStorage>) {
        let Some(target) = self.resolve(storage) else {
            return;
        };

        let encoded = match encode_tasks(tasks) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(error = %err, "failed to encode tasks for storage");
                return;
            }
        };

        match target.set(TASKS_STORAGE_KEY, &encoded) {
            Ok(()) => debug!(count = tasks.len(), "saved tasks"),
            Err(err) => warn!(error = %err, key = TASKS_STORAGE_KEY, "failed to save tasks"),
        }
    }
}
