//! Application services for task persistence and board sessions.

mod board;
mod repository;

pub use board::TaskBoard;
pub use repository::{
    StoredTasksError, TASKS_STORAGE_KEY, TaskRepository, decode_tasks, encode_tasks,
};
