//! Sorting tasks with deterministic, reproducible ordering.
//!
//! Every sort key appends the task id as a tiebreaker, so equal primary keys
//! always resolve the same way regardless of input order.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::tasks::models::{Priority, Task};

/// Field to sort tasks by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Numeric id (default).
    #[default]
    Id,
    /// Case-insensitive title.
    Title,
    /// Priority: high, then medium, then low, then no priority.
    Priority,
    /// Due date, soonest first; tasks without a due date sort last.
    Due,
}

impl SortKey {
    /// Parse a sort key from a string.
    ///
    /// Unrecognized values fall back to `Id` rather than failing; the
    /// original behavior treats any unknown field as an id sort.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "title" => Self::Title,
            "priority" => Self::Priority,
            "due" => Self::Due,
            _ => Self::Id,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending (default).
    #[default]
    Asc,
    /// Descending. Reverses the full key tuple, tiebreak included.
    Desc,
}

impl SortOrder {
    /// Parse a sort order from a string.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the string is not `asc` or `desc`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(Error::InvalidArgument(format!("order must be asc or desc (got '{s}')"))),
        }
    }
}

/// Rank priorities for sorting: high < medium < low < none.
const fn priority_rank(priority: Option<Priority>) -> u8 {
    match priority {
        Some(Priority::High) => 0,
        Some(Priority::Medium) => 1,
        Some(Priority::Low) => 2,
        None => 3,
    }
}

/// Compare two tasks by the given key, with id as tiebreaker.
fn compare(a: &Task, b: &Task, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Title => {
            (a.title.to_lowercase(), a.id).cmp(&(b.title.to_lowercase(), b.id))
        }
        SortKey::Priority => (priority_rank(a.priority), a.id)
            .cmp(&(priority_rank(b.priority), b.id)),
        SortKey::Due => {
            // Missing due dates map to an unreachable maximum-date sentinel.
            let a_due = a.due_date.unwrap_or(NaiveDate::MAX);
            let b_due = b.due_date.unwrap_or(NaiveDate::MAX);
            (a_due, a.id).cmp(&(b_due, b.id))
        }
    }
}

/// Sort tasks by the given key and order.
///
/// The sort is stable and deterministic: the id tiebreaker is part of the key
/// tuple, and `SortOrder::Desc` reverses the whole tuple.
#[must_use]
pub fn sort_tasks(tasks: &[Task], key: SortKey, order: SortOrder) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    sorted
}
