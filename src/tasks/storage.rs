//! In-memory task storage with auto-incrementing ids.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::tasks::models::Task;

/// Maximum number of live tasks the storage will hold.
pub const MAX_TASKS: usize = 1000;

/// In-memory repository of tasks keyed by id.
///
/// Ids are assigned sequentially starting at 1 and are never reused, even
/// after deletion; only [`Storage::reset`] restarts the counter. The storage
/// is the single owner of the task table — callers hold it by value or `&mut`
/// reference, so the borrow checker serializes every read-modify-write
/// sequence.
#[derive(Debug)]
pub struct Storage {
    tasks: BTreeMap<u32, Task>,
    next_id: u32,
}

impl Storage {
    /// Create an empty storage. The first `add` yields id 1.
    #[must_use]
    pub fn new() -> Self {
        Self { tasks: BTreeMap::new(), next_id: 1 }
    }

    /// Add a task, assigning the next sequential id.
    ///
    /// Any id on the input is ignored. Returns the stored copy with the
    /// assigned id.
    ///
    /// # Errors
    ///
    /// Returns `Error::StorageLimit` if the storage already holds
    /// `MAX_TASKS` live tasks.
    pub fn add(&mut self, mut task: Task) -> Result<Task> {
        if self.tasks.len() >= MAX_TASKS {
            return Err(Error::StorageLimit { max: MAX_TASKS });
        }

        task.id = self.next_id;
        self.next_id += 1;
        self.tasks.insert(task.id, task.clone());
        debug!(id = task.id, title = %task.title, "task added");
        Ok(task)
    }

    /// Get a task by id.
    ///
    /// # Errors
    ///
    /// Returns `Error::TaskNotFound` if no task with that id exists.
    pub fn get(&self, id: u32) -> Result<Task> {
        self.tasks.get(&id).cloned().ok_or(Error::TaskNotFound(id))
    }

    /// Get all tasks in id-ascending (insertion) order.
    #[must_use]
    pub fn get_all(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }

    /// Replace the stored record matching `task.id`.
    ///
    /// Returns the stored copy.
    ///
    /// # Errors
    ///
    /// Returns `Error::TaskNotFound` if no task with that id exists.
    pub fn update(&mut self, task: Task) -> Result<Task> {
        if !self.tasks.contains_key(&task.id) {
            return Err(Error::TaskNotFound(task.id));
        }
        debug!(id = task.id, "task updated");
        self.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    /// Remove and return the task with the given id.
    ///
    /// The id is never reassigned to a later task.
    ///
    /// # Errors
    ///
    /// Returns `Error::TaskNotFound` if no task with that id exists.
    pub fn delete(&mut self, id: u32) -> Result<Task> {
        let task = self.tasks.remove(&id).ok_or(Error::TaskNotFound(id))?;
        debug!(id, "task deleted");
        Ok(task)
    }

    /// Check whether a task with the given id exists.
    #[must_use]
    pub fn exists(&self, id: u32) -> bool {
        self.tasks.contains_key(&id)
    }

    /// Current number of live tasks.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Clear all tasks and reset the id counter, so the next `add` yields 1.
    pub fn reset(&mut self) {
        self.tasks.clear();
        self.next_id = 1;
        debug!("storage reset");
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}
