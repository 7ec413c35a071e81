//! Task entity and in-memory storage.
//!
//! This module provides the domain model for the todo core:
//! - Tasks with title, completion status, priority, category, due date, and
//!   recurrence schedule
//! - An in-memory, capacity-bounded storage with auto-incrementing ids
//!
//! # Example
//!
//! ```
//! use todo_core::tasks::{Priority, Storage, Task};
//!
//! let mut storage = Storage::new();
//!
//! let mut task = Task::new("Fix login bug");
//! task.priority = Some(Priority::High);
//!
//! let saved = storage.add(task).unwrap();
//! assert_eq!(saved.id, 1);
//!
//! let mut task = storage.get(saved.id).unwrap();
//! task.toggle_complete();
//! storage.update(task).unwrap();
//! ```

pub mod models;
pub mod storage;

pub use models::{
    parse_due_date, validate_title, Category, Priority, Recurrence, Task, TITLE_MAX_LEN,
};
pub use storage::{Storage, MAX_TASKS};
