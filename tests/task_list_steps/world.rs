//! Shared world state for task list BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tasklist::task::{
    adapters::InMemoryStorage,
    domain::{Task, UuidIdGenerator},
    services::{TaskBoard, TaskRepository},
};

/// Board type used by the BDD world.
pub type TestTaskBoard = TaskBoard<DefaultClock, UuidIdGenerator>;

/// Scenario world for task list behaviour tests.
pub struct TaskListWorld {
    pub storage: InMemoryStorage,
    pub board: Option<TestTaskBoard>,
    pub last_error_code: Option<&'static str>,
    pub last_cleared: Option<bool>,
}

impl TaskListWorld {
    /// Creates a world with empty storage and no open board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
            board: None,
            last_error_code: None,
            last_cleared: None,
        }
    }

    /// Opens a fresh board over the world's storage.
    pub fn open_board(&mut self) {
        self.board = Some(TaskBoard::open(
            TaskRepository::new(Arc::new(self.storage.clone())),
            Arc::new(DefaultClock),
            Arc::new(UuidIdGenerator),
        ));
    }

    /// Returns the open board.
    pub fn board(&self) -> Result<&TestTaskBoard, eyre::Report> {
        self.board
            .as_ref()
            .ok_or_else(|| eyre::eyre!("task list has not been opened in scenario world"))
    }

    /// Returns the open board mutably.
    pub fn board_mut(&mut self) -> Result<&mut TestTaskBoard, eyre::Report> {
        self.board
            .as_mut()
            .ok_or_else(|| eyre::eyre!("task list has not been opened in scenario world"))
    }

    /// Finds the task carrying `title`.
    pub fn task_titled(&self, title: &str) -> Result<Task, eyre::Report> {
        self.board()?
            .tasks()
            .iter()
            .find(|task| task.title() == title)
            .cloned()
            .ok_or_else(|| eyre::eyre!("no task titled '{title}'"))
    }
}

impl Default for TaskListWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskListWorld {
    TaskListWorld::default()
}
