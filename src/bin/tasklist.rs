//! Command line host for the task list.
//!
//! Usage:
//!
//! ```text
//! tasklist [--config <path>] [--data-dir <dir>] [--log-level <level>] <command>
//! ```
//!
//! Commands: `add <title>`, `list [--filter all|active|completed]`,
//! `rename <id> <title>`, `toggle <id>`, `delete <id>`, `clear-completed`.
//!
//! Tasks are kept in a file-backed store under the configured data
//! directory and saved after every change. Validation failures and renames
//! of unknown tasks are reported with their message and exit non-zero.
//! Toggling or deleting an unknown task changes nothing and is not an error.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use mockable::DefaultClock;
use tasklist::config::{ConfigArgs, TaskListConfig};
use tasklist::task::{
    adapters::FileStorage,
    domain::{TaskFilter, TaskId, UuidIdGenerator},
    services::{TaskBoard, TaskRepository},
};
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

type Board = TaskBoard<DefaultClock, UuidIdGenerator>;

#[derive(Parser, Debug)]
#[command(version, about = "Single-user task list")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a task.
    Add {
        /// Task title.
        title: String,
    },
    /// List tasks.
    List {
        /// Which tasks to show.
        #[arg(long, default_value_t = TaskFilter::All)]
        filter: TaskFilter,
    },
    /// Rename a task.
    Rename {
        /// Task identifier.
        id: String,
        /// New title.
        title: String,
    },
    /// Flip a task between active and completed.
    Toggle {
        /// Task identifier.
        id: String,
    },
    /// Delete a task.
    Delete {
        /// Task identifier.
        id: String,
    },
    /// Delete every completed task.
    ClearCompleted,
}

fn main() -> Result<ExitCode, BoxError> {
    let cli = Cli::parse();
    let config = TaskListConfig::load(&cli.config)?;
    init_tracing(&config.log_level);

    let storage = FileStorage::open(&config.data_dir)?;
    tracing::debug!(data_dir = %storage.root(), "opened task storage");
    let mut board = TaskBoard::open(
        TaskRepository::new(Arc::new(storage)),
        Arc::new(DefaultClock),
        Arc::new(UuidIdGenerator),
    );

    let mut stdout = io::stdout().lock();
    run(&mut board, cli.command, &mut stdout)
}

fn init_tracing(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn run(board: &mut Board, command: Command, out: &mut impl Write) -> Result<ExitCode, BoxError> {
    match command {
        Command::Add { title } => match board.add(&title) {
            Ok(task) => writeln!(out, "{}", task.id())?,
            Err(err) => return fail(&err),
        },
        Command::List { filter } => list(board, filter, out)?,
        Command::Rename { id, title } => {
            if let Err(err) = board.rename(&TaskId::from(id), &title) {
                return fail(&err);
            }
        }
        Command::Toggle { id } => {
            let task_id = TaskId::from(id);
            if !board.toggle(&task_id) {
                writeln!(out, "No task with id '{task_id}'; nothing changed.")?;
            }
        }
        Command::Delete { id } => {
            let task_id = TaskId::from(id);
            if !board.delete(&task_id) {
                writeln!(out, "No task with id '{task_id}'; nothing changed.")?;
            }
        }
        Command::ClearCompleted => {
            if !board.clear_completed() {
                writeln!(out, "No completed tasks to clear.")?;
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn list(board: &Board, filter: TaskFilter, out: &mut impl Write) -> io::Result<()> {
    let visible = board.visible(filter);
    if visible.is_empty() {
        return writeln!(out, "{}", board.empty_state_message(filter));
    }

    for task in visible {
        let mark = if task.is_completed() { 'x' } else { ' ' };
        writeln!(out, "[{mark}] {}  {}", task.id(), task.title())?;
    }
    let summary = board.summary();
    writeln!(
        out,
        "{} active, {} completed",
        summary.active, summary.completed
    )
}

fn fail(message: &dyn std::fmt::Display) -> Result<ExitCode, BoxError> {
    writeln!(io::stderr(), "{message}")?;
    Ok(ExitCode::FAILURE)
}
