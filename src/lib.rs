//! # `todo_core`
//!
//! Task-management core for a single-user todo CLI: an in-memory task store
//! plus pure services for filtering, searching, sorting, due-date reminders,
//! and recurring tasks.
//!
//! The command layer (argument parsing, console output, exit codes) lives
//! outside this crate; it hands the core already-validated values and turns
//! the error kinds in [`error`] into user-facing messages.

pub mod error;
pub mod services;
pub mod tasks;

pub use error::{Error, Result};
pub use tasks::{Category, Priority, Recurrence, Storage, Task, MAX_TASKS, TITLE_MAX_LEN};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
