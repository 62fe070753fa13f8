//! Error types for task title validation and task list mutations.

use super::{TASK_TITLE_MAX_LENGTH, TaskId};
use thiserror::Error;

/// Errors returned while validating a task title.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TaskTitleError {
    /// The title is empty after trimming.
    #[error("Task title must not be empty.")]
    EmptyTitle,

    /// The trimmed title exceeds [`TASK_TITLE_MAX_LENGTH`] characters.
    #[error("Task title must be {max} characters or fewer.", max = TASK_TITLE_MAX_LENGTH)]
    TitleTooLong {
        /// Character count of the trimmed title.
        actual: usize,
    },
}

impl TaskTitleError {
    /// Returns the stable machine-readable error code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::EmptyTitle => "EMPTY_TITLE",
            Self::TitleTooLong { .. } => "TITLE_TOO_LONG",
        }
    }
}

/// Errors returned by task list mutations that require an existing task.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The supplied title failed validation.
    #[error(transparent)]
    InvalidTitle(#[from] TaskTitleError),

    /// No task in the collection carries the referenced identifier.
    #[error("Task with id '{0}' was not found.")]
    NotFound(TaskId),
}

impl TaskDomainError {
    /// Returns the stable machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidTitle(err) => err.code(),
            Self::NotFound(_) => "TASK_NOT_FOUND",
        }
    }
}
