//! Pure services over task collections.
//!
//! Each service takes a slice of tasks (typically from `Storage::get_all`)
//! and returns a new collection or a computed value; none of them mutate
//! their input or touch storage.

pub mod filter;
pub mod recurrence;
pub mod reminder;
pub mod search;
pub mod sort;

pub use filter::{filter_tasks, StatusFilter};
pub use recurrence::{
    calculate_next_due_date, create_next_instance, handle_overdue_recurring, is_recurring,
};
pub use reminder::{
    get_days_until_due, get_startup_reminders, get_tasks_with_reminders, is_reminder_eligible,
    should_show_reminder, REMINDER_INTERVALS,
};
pub use search::search_tasks;
pub use sort::{sort_tasks, SortKey, SortOrder};
