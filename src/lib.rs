//! Tasklist: a single-user task list core.
//!
//! This crate provides pure task-list transitions and best-effort
//! persistence of the task collection in key-value storage.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete storage implementations (memory, files)
//! - **Services**: Persistence and session orchestration
//!
//! # Modules
//!
//! - [`task`]: Task domain, storage ports and adapters, and services
//! - [`config`]: Layered configuration for the `tasklist` binary

pub mod config;
pub mod task;
