//! Keyword search over task titles.

use crate::tasks::models::Task;

/// Search tasks by case-insensitive substring match against the title.
///
/// Returns an empty collection if nothing matches. Input order is preserved.
#[must_use]
pub fn search_tasks(tasks: &[Task], keyword: &str) -> Vec<Task> {
    let keyword = keyword.to_lowercase();
    tasks.iter().filter(|t| t.title.to_lowercase().contains(&keyword)).cloned().collect()
}
