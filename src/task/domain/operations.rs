//! Pure transitions over a task collection snapshot.
//!
//! Every function receives the current collection and returns a new one.
//! Tasks that are not the target of a transition are carried over
//! unchanged and in their original order.

use super::{Task, TaskDomainError, TaskId, validate_task_title};
use mockable::Clock;

/// Result of [`toggle_task_completion`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggled {
    /// Collection after the toggle.
    pub tasks: Vec<Task>,
    /// Whether a task matched the identifier.
    pub changed: bool,
}

/// Result of [`delete_task_by_id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deleted {
    /// Collection after the deletion.
    pub tasks: Vec<Task>,
    /// Whether any task was removed.
    pub deleted: bool,
}

/// Result of [`clear_completed_tasks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleared {
    /// Collection after clearing.
    pub tasks: Vec<Task>,
    /// Whether any completed task was removed.
    pub cleared: bool,
}

/// Replaces the title of the task with `task_id`.
///
/// The title is validated before the collection is scanned. Only the first
/// task carrying `task_id` is updated.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidTitle`] when the title fails
/// validation, or [`TaskDomainError::NotFound`] when no task carries
/// `task_id`.
pub fn update_task_title(
    tasks: &[Task],
    task_id: &TaskId,
    input: &str,
    clock: &impl Clock,
) -> Result<Vec<Task>, TaskDomainError> {
    let title = validate_task_title(input)?;
    let position = tasks
        .iter()
        .position(|task| task.id() == task_id)
        .ok_or_else(|| TaskDomainError::NotFound(task_id.clone()))?;

    Ok(replace_at(tasks, position, |task| {
        task.with_title(title, clock)
    }))
}

/// Flips the completion flag of the task with `task_id`.
///
/// A missing identifier is not an error: the collection is returned as-is
/// and `changed` is `false`.
#[must_use]
pub fn toggle_task_completion(tasks: &[Task], task_id: &TaskId, clock: &impl Clock) -> Toggled {
    match tasks.iter().position(|task| task.id() == task_id) {
        Some(position) => Toggled {
            tasks: replace_at(tasks, position, |task| task.with_completion_toggled(clock)),
            changed: true,
        },
        None => Toggled {
            tasks: tasks.to_vec(),
            changed: false,
        },
    }
}

/// Removes every task carrying `task_id`.
#[must_use]
pub fn delete_task_by_id(tasks: &[Task], task_id: &TaskId) -> Deleted {
    let remaining: Vec<Task> = tasks
        .iter()
        .filter(|task| task.id() != task_id)
        .cloned()
        .collect();
    let deleted = remaining.len() != tasks.len();

    Deleted {
        tasks: remaining,
        deleted,
    }
}

/// Removes every completed task.
#[must_use]
pub fn clear_completed_tasks(tasks: &[Task]) -> Cleared {
    let remaining: Vec<Task> = tasks
        .iter()
        .filter(|task| !task.is_completed())
        .cloned()
        .collect();
    let cleared = remaining.len() != tasks.len();

    Cleared {
        tasks: remaining,
        cleared,
    }
}

/// Copies `tasks`, rebuilding the entry at `position` with `update`.
fn replace_at(tasks: &[Task], position: usize, update: impl FnOnce(&Task) -> Task) -> Vec<Task> {
    let mut next = tasks.to_vec();
    if let Some(slot) = next.get_mut(position) {
        *slot = update(&*slot);
    }
    next
}
