//! Task list views: completion filters, counts, and empty-state text.

use super::Task;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Completion-based view over a task collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaskFilter {
    /// Every task.
    #[default]
    All,
    /// Tasks not yet completed.
    Active,
    /// Completed tasks.
    Completed,
}

impl TaskFilter {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Returns whether `task` belongs in this view.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.is_completed(),
            Self::Completed => task.is_completed(),
        }
    }
}

/// Error returned while parsing a [`TaskFilter`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task filter '{0}', expected all, active, or completed")]
pub struct ParseTaskFilterError(pub String);

impl FromStr for TaskFilter {
    type Err = ParseTaskFilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskFilterError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the tasks visible under `filter`, in collection order.
#[must_use]
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

/// Task counts for a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskSummary {
    /// Number of tasks.
    pub total: usize,
    /// Number of tasks not yet completed.
    pub active: usize,
    /// Number of completed tasks.
    pub completed: usize,
}

impl TaskSummary {
    /// Counts the tasks in `tasks`.
    #[must_use]
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.is_completed()).count();
        Self {
            total: tasks.len(),
            active: tasks.len() - completed,
            completed,
        }
    }
}

/// Returns the message shown when `filter` selects no tasks.
#[must_use]
pub const fn empty_state_message(tasks: &[Task], filter: TaskFilter) -> &'static str {
    if tasks.is_empty() {
        return "No tasks yet. Add your first todo above.";
    }

    match filter {
        TaskFilter::Active => "No active tasks right now.",
        TaskFilter::Completed => "No completed tasks yet.",
        TaskFilter::All => "No tasks available.",
    }
}
