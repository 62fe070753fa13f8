//! In-memory task board backed by a task repository.
//!
//! The board owns the current task collection for a session. It seeds the
//! collection from the repository when opened, applies domain transitions
//! for each user action, and saves after every change.

use std::sync::Arc;

use mockable::Clock;
use tracing::debug;

use super::TaskRepository;
use crate::task::domain::{
    IdGenerator, Task, TaskDomainError, TaskFilter, TaskId, TaskSummary, TaskTitleError,
    clear_completed_tasks, create_task, delete_task_by_id, empty_state_message, filter_tasks,
    toggle_task_completion, update_task_title,
};

/// Session state for a single user's task list.
#[derive(Debug)]
pub struct TaskBoard<C, G>
where
    C: Clock,
    G: IdGenerator,
{
    repository: TaskRepository,
    clock: Arc<C>,
    ids: Arc<G>,
    tasks: Vec<Task>,
}

impl<C, G> TaskBoard<C, G>
where
    C: Clock,
    G: IdGenerator,
{
    /// Opens a board seeded with the collection stored in `repository`.
    #[must_use]
    pub fn open(repository: TaskRepository, clock: Arc<C>, ids: Arc<G>) -> Self {
        let tasks = repository.load(None);
        debug!(count = tasks.len(), "opened task board");
        Self {
            repository,
            clock,
            ids,
            tasks,
        }
    }

    /// Returns the full collection in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with `task_id`, if present.
    #[must_use]
    pub fn get(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Returns task counts for the collection.
    #[must_use]
    pub fn summary(&self) -> TaskSummary {
        TaskSummary::of(&self.tasks)
    }

    /// Returns the tasks visible under `filter`.
    #[must_use]
    pub fn visible(&self, filter: TaskFilter) -> Vec<&Task> {
        filter_tasks(&self.tasks, filter)
    }

    /// Returns the message to show when `filter` selects nothing.
    #[must_use]
    pub fn empty_state_message(&self, filter: TaskFilter) -> &'static str {
        empty_state_message(&self.tasks, filter)
    }

    /// Appends a new task with `title`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTitleError`] when the title is invalid; the collection
    /// is left untouched and nothing is saved.
    pub fn add(&mut self, title: &str) -> Result<Task, TaskTitleError> {
        let task = create_task(title, &*self.clock, &*self.ids)?;
        debug!(task_id = %task.id(), "added task");
        let mut next = self.tasks.clone();
        next.push(task.clone());
        self.replace(next);
        Ok(task)
    }

    /// Renames the task with `task_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the title is invalid or the task does
    /// not exist; the collection is left untouched.
    pub fn rename(&mut self, task_id: &TaskId, title: &str) -> Result<(), TaskDomainError> {
        let next = update_task_title(&self.tasks, task_id, title, &*self.clock)?;
        debug!(%task_id, "renamed task");
        self.replace(next);
        Ok(())
    }

    /// Flips completion of the task with `task_id`.
    ///
    /// Returns `false` when no task matched.
    pub fn toggle(&mut self, task_id: &TaskId) -> bool {
        let outcome = toggle_task_completion(&self.tasks, task_id, &*self.clock);
        if outcome.changed {
            debug!(%task_id, "toggled task completion");
            self.replace(outcome.tasks);
        }
        outcome.changed
    }

    /// Deletes the task with `task_id`.
    ///
    /// Returns `false` when no task matched.
    pub fn delete(&mut self, task_id: &TaskId) -> bool {
        let outcome = delete_task_by_id(&self.tasks, task_id);
        if outcome.deleted {
            debug!(%task_id, "deleted task");
            self.replace(outcome.tasks);
        }
        outcome.deleted
    }

    /// Deletes every completed task.
    ///
    /// Returns `false` when there was nothing to clear.
    pub fn clear_completed(&mut self) -> bool {
        let outcome = clear_completed_tasks(&self.tasks);
        if outcome.cleared {
            debug!(remaining = outcome.tasks.len(), "cleared completed tasks");
            self.replace(outcome.tasks);
        }
        outcome.cleared
    }

    fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.repository.save(&self.tasks, None);
    }
}
