//! Error types for `todo_core`.

/// Errors that can occur in the task-management core.
///
/// The first two variants are raised by the core itself. The remaining
/// variants are the validation errors the command layer raises while parsing
/// user input, before any value reaches the core; they live here so the whole
/// application shares one error vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No task with the given id exists in storage.
    #[error("task not found: {0}")]
    TaskNotFound(u32),

    /// Storage already holds the maximum number of live tasks.
    #[error("storage limit reached: cannot hold more than {max} tasks")]
    StorageLimit {
        /// The capacity that was hit.
        max: usize,
    },

    /// A task title was empty or whitespace-only.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// A date string could not be parsed.
    #[error("invalid date: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// An argument value was not one of the accepted choices.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An unrecognized command name.
    #[error("unknown command: '{0}'")]
    InvalidCommand(String),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_not_found_display() {
        let err = Error::TaskNotFound(42);
        assert_eq!(err.to_string(), "task not found: 42");
    }

    #[test]
    fn test_storage_limit_display() {
        let err = Error::StorageLimit { max: 1000 };
        assert!(err.to_string().contains("1000"));
    }

    #[test]
    fn test_invalid_date_display() {
        let err = Error::InvalidDate("2026-13-40".to_string());
        assert!(err.to_string().contains("2026-13-40"));
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }
}
