//! Recurring-task scheduling.
//!
//! Completing a recurring task spawns a new incomplete instance with an
//! advanced due date. The spawn itself is the caller's job: this module only
//! computes the successor, and the caller persists it via `Storage::add`.

use chrono::{Duration, Local, NaiveDate};
use tracing::debug;

use crate::tasks::models::{Recurrence, Task};

/// Calculate the next due date for a recurrence schedule.
///
/// Monthly uses a flat 30-day step, not calendar-month arithmetic; the
/// original application pinned that behavior and callers rely on it.
/// `Recurrence::None` returns the input unchanged.
#[must_use]
pub fn calculate_next_due_date(current_due: NaiveDate, recurrence: Recurrence) -> NaiveDate {
    match recurrence {
        Recurrence::Daily => current_due + Duration::days(1),
        Recurrence::Weekly => current_due + Duration::days(7),
        Recurrence::Monthly => current_due + Duration::days(30),
        Recurrence::None => current_due,
    }
}

/// Check if a task is recurring.
#[must_use]
pub fn is_recurring(task: &Task) -> bool {
    task.recurrence != Recurrence::None
}

/// Create the next instance of a recurring task after completion.
///
/// Returns an unsaved task (id 0) copying title, priority, category, and
/// recurrence, with the due date advanced one period, `completed` and
/// `reminder_dismissed` cleared, and fresh timestamps.
///
/// Returns `None` if the task is not recurring or has no due date; recurrence
/// without a due date never spawns a successor.
#[must_use]
pub fn create_next_instance(completed_task: &Task) -> Option<Task> {
    if !is_recurring(completed_task) {
        return None;
    }
    let due_date = completed_task.due_date?;

    let next_due = calculate_next_due_date(due_date, completed_task.recurrence);
    debug!(
        from = %due_date,
        to = %next_due,
        schedule = %completed_task.recurrence,
        "spawning next recurring instance"
    );

    let mut next = Task::new(completed_task.title.clone());
    next.priority = completed_task.priority;
    next.category = completed_task.category;
    next.due_date = Some(next_due);
    next.recurrence = completed_task.recurrence;
    Some(next)
}

/// Check if a recurring task is overdue, relative to an explicit date.
///
/// Pure predicate for display and alerting; overdue recurring tasks are not
/// auto-advanced, and no successor is created until the task is completed.
#[must_use]
pub fn handle_overdue_recurring_on(task: &Task, today: NaiveDate) -> bool {
    if !is_recurring(task) {
        return false;
    }
    let Some(due_date) = task.due_date else {
        return false;
    };
    !task.completed && due_date < today
}

/// Check if a recurring task is overdue as of today.
#[must_use]
pub fn handle_overdue_recurring(task: &Task) -> bool {
    handle_overdue_recurring_on(task, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn recurring_task(recurrence: Recurrence, due: Option<NaiveDate>) -> Task {
        let mut task = Task::new("Weekly review");
        task.recurrence = recurrence;
        task.due_date = due;
        task
    }

    #[test]
    fn test_next_due_date_daily() {
        assert_eq!(
            calculate_next_due_date(date(2026, 2, 7), Recurrence::Daily),
            date(2026, 2, 8)
        );
    }

    #[test]
    fn test_next_due_date_weekly() {
        assert_eq!(
            calculate_next_due_date(date(2026, 2, 7), Recurrence::Weekly),
            date(2026, 2, 14)
        );
    }

    #[test]
    fn test_next_due_date_monthly_is_flat_30_days() {
        // 30 days, not one calendar month: Jan 31 + 30d = Mar 2 in 2026.
        assert_eq!(
            calculate_next_due_date(date(2026, 1, 31), Recurrence::Monthly),
            date(2026, 3, 2)
        );
    }

    #[test]
    fn test_next_due_date_none_unchanged() {
        assert_eq!(
            calculate_next_due_date(date(2026, 2, 7), Recurrence::None),
            date(2026, 2, 7)
        );
    }

    #[test]
    fn test_is_recurring() {
        assert!(is_recurring(&recurring_task(Recurrence::Daily, None)));
        assert!(!is_recurring(&recurring_task(Recurrence::None, None)));
    }

    #[test]
    fn test_create_next_instance() {
        let mut task = recurring_task(Recurrence::Weekly, Some(date(2026, 2, 7)));
        task.priority = Some(crate::tasks::Priority::High);
        task.category = Some(crate::tasks::Category::Work);
        task.completed = true;
        task.reminder_dismissed = true;

        let next = create_next_instance(&task).unwrap();
        assert_eq!(next.id, 0);
        assert_eq!(next.title, task.title);
        assert_eq!(next.priority, task.priority);
        assert_eq!(next.category, task.category);
        assert_eq!(next.recurrence, Recurrence::Weekly);
        assert_eq!(next.due_date, Some(date(2026, 2, 14)));
        assert!(!next.completed);
        assert!(!next.reminder_dismissed);
    }

    #[test]
    fn test_create_next_instance_not_recurring() {
        let task = recurring_task(Recurrence::None, Some(date(2026, 2, 7)));
        assert!(create_next_instance(&task).is_none());
    }

    #[test]
    fn test_create_next_instance_no_due_date() {
        let task = recurring_task(Recurrence::Weekly, None);
        assert!(create_next_instance(&task).is_none());
    }

    #[test]
    fn test_handle_overdue_recurring() {
        let today = date(2026, 8, 30);

        let overdue = recurring_task(Recurrence::Daily, Some(date(2026, 8, 29)));
        assert!(handle_overdue_recurring_on(&overdue, today));

        // Due today is not overdue.
        let due_today = recurring_task(Recurrence::Daily, Some(today));
        assert!(!handle_overdue_recurring_on(&due_today, today));

        let not_recurring = recurring_task(Recurrence::None, Some(date(2026, 8, 29)));
        assert!(!handle_overdue_recurring_on(&not_recurring, today));

        let no_due = recurring_task(Recurrence::Weekly, None);
        assert!(!handle_overdue_recurring_on(&no_due, today));

        let mut completed = recurring_task(Recurrence::Weekly, Some(date(2026, 8, 29)));
        completed.completed = true;
        assert!(!handle_overdue_recurring_on(&completed, today));
    }
}
