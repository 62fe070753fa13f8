//! Domain model for the task list.
//!
//! The domain is a set of pure functions over an explicit snapshot of the
//! task collection. Time and identifier generation are injected
//! capabilities; nothing here performs I/O.

mod error;
mod filter;
mod ids;
mod operations;
mod task;
mod title;

pub use error::{TaskDomainError, TaskTitleError};
pub use filter::{
    ParseTaskFilterError, TaskFilter, TaskSummary, empty_state_message, filter_tasks,
};
pub use ids::{IdGenerator, TaskId, UuidIdGenerator};
pub use operations::{
    Cleared, Deleted, Toggled, clear_completed_tasks, delete_task_by_id, toggle_task_completion,
    update_task_title,
};
pub use task::{PersistedTaskData, Task, create_task, create_task_now};
pub use title::{TASK_TITLE_MAX_LENGTH, normalize_task_title, validate_task_title};
