//! Filtering tasks by completion status, priority, and category.

use crate::error::{Error, Result};
use crate::tasks::models::{Category, Priority, Task};

/// Completion-status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Only completed tasks.
    Complete,
    /// Only incomplete tasks.
    Incomplete,
    /// No status restriction (default).
    #[default]
    All,
}

impl StatusFilter {
    /// Parse a status filter from a string.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the string is not a valid filter.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "complete" => Ok(Self::Complete),
            "incomplete" => Ok(Self::Incomplete),
            "all" => Ok(Self::All),
            _ => Err(Error::InvalidArgument(format!(
                "status must be one of: complete, incomplete, all (got '{s}')"
            ))),
        }
    }

    /// Check whether a task passes this filter.
    #[must_use]
    pub const fn matches(&self, task: &Task) -> bool {
        match self {
            Self::Complete => task.completed,
            Self::Incomplete => !task.completed,
            Self::All => true,
        }
    }
}

/// Filter tasks by status, priority, and/or category.
///
/// The criteria compose by logical AND. `None` for priority or category
/// imposes no restriction. Input order is preserved among surviving tasks.
#[must_use]
pub fn filter_tasks(
    tasks: &[Task],
    status: StatusFilter,
    priority: Option<Priority>,
    category: Option<Category>,
) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| status.matches(t))
        .filter(|t| priority.is_none() || t.priority == priority)
        .filter(|t| category.is_none() || t.category == category)
        .cloned()
        .collect()
}
