//! Due-date reminders and urgency ordering.

use chrono::{Local, NaiveDate};

use crate::tasks::models::Task;

/// Reminder intervals in days before the due date.
///
/// These are display tiers; eligibility uses only the outer bound.
pub const REMINDER_INTERVALS: [i64; 4] = [7, 3, 1, 0];

/// Today's calendar date in local time.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Days until the task is due, relative to an explicit date.
///
/// Negative when overdue, `None` when the task has no due date.
#[must_use]
pub fn get_days_until_due_on(task: &Task, today: NaiveDate) -> Option<i64> {
    task.due_date.map(|due| (due - today).num_days())
}

/// Days until the task is due, relative to today.
///
/// Negative when overdue, `None` when the task has no due date.
#[must_use]
pub fn get_days_until_due(task: &Task) -> Option<i64> {
    get_days_until_due_on(task, today())
}

/// Check if a task is eligible for a reminder.
///
/// Eligible tasks have a due date, are not completed, and have not had their
/// reminder dismissed.
#[must_use]
pub const fn is_reminder_eligible(task: &Task) -> bool {
    task.due_date.is_some() && !task.completed && !task.reminder_dismissed
}

/// Check if a task should show a reminder, relative to an explicit date.
///
/// Shows for overdue tasks and for tasks due within the outermost reminder
/// interval.
#[must_use]
pub fn should_show_reminder_on(task: &Task, today: NaiveDate) -> bool {
    if !is_reminder_eligible(task) {
        return false;
    }
    let Some(days_until) = get_days_until_due_on(task, today) else {
        return false;
    };

    if days_until < 0 {
        return true;
    }
    let outer_bound = REMINDER_INTERVALS.iter().copied().max().unwrap_or(0);
    days_until <= outer_bound
}

/// Check if a task should show a reminder today.
#[must_use]
pub fn should_show_reminder(task: &Task) -> bool {
    should_show_reminder_on(task, today())
}

/// Get tasks needing reminders, sorted by urgency relative to an explicit date.
///
/// Overdue tasks come first (most negative days-until-due), then tasks in
/// ascending days-until-due order.
#[must_use]
pub fn get_tasks_with_reminders_on(tasks: &[Task], today: NaiveDate) -> Vec<Task> {
    let mut reminders: Vec<Task> =
        tasks.iter().filter(|t| should_show_reminder_on(t, today)).cloned().collect();

    // Eligibility guarantees a due date, so the fallback is unreachable.
    reminders.sort_by_key(|t| get_days_until_due_on(t, today).unwrap_or(i64::MAX));
    reminders
}

/// Get tasks needing reminders today, sorted by urgency.
#[must_use]
pub fn get_tasks_with_reminders(tasks: &[Task]) -> Vec<Task> {
    get_tasks_with_reminders_on(tasks, today())
}

/// Get tasks to show as reminders on app startup.
///
/// Same contract as [`get_tasks_with_reminders`]; the separate name exists
/// for call-site clarity.
#[must_use]
pub fn get_startup_reminders(tasks: &[Task]) -> Vec<Task> {
    get_tasks_with_reminders(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    fn task_due_in(days: i64) -> Task {
        let mut task = Task::new(format!("Due in {days} days"));
        task.due_date = Some(anchor() + Duration::days(days));
        task
    }

    #[test]
    fn test_days_until_due() {
        assert_eq!(get_days_until_due_on(&task_due_in(3), anchor()), Some(3));
        assert_eq!(get_days_until_due_on(&task_due_in(0), anchor()), Some(0));
        assert_eq!(get_days_until_due_on(&task_due_in(-2), anchor()), Some(-2));
        assert_eq!(get_days_until_due_on(&Task::new("No due date"), anchor()), None);
    }

    #[test]
    fn test_reminder_eligibility() {
        let task = task_due_in(3);
        assert!(is_reminder_eligible(&task));

        let mut completed = task_due_in(3);
        completed.completed = true;
        assert!(!is_reminder_eligible(&completed));

        let mut dismissed = task_due_in(3);
        dismissed.reminder_dismissed = true;
        assert!(!is_reminder_eligible(&dismissed));

        assert!(!is_reminder_eligible(&Task::new("No due date")));
    }

    #[test]
    fn test_should_show_reminder_within_window() {
        assert!(should_show_reminder_on(&task_due_in(0), anchor()));
        assert!(should_show_reminder_on(&task_due_in(1), anchor()));
        assert!(should_show_reminder_on(&task_due_in(7), anchor()));
        assert!(!should_show_reminder_on(&task_due_in(8), anchor()));
    }

    #[test]
    fn test_should_show_reminder_overdue() {
        assert!(should_show_reminder_on(&task_due_in(-1), anchor()));
        assert!(should_show_reminder_on(&task_due_in(-30), anchor()));
    }

    #[test]
    fn test_should_show_reminder_ineligible() {
        let mut dismissed = task_due_in(-1);
        dismissed.reminder_dismissed = true;
        assert!(!should_show_reminder_on(&dismissed, anchor()));
    }

    #[test]
    fn test_tasks_with_reminders_sorted_by_urgency() {
        let tasks = vec![task_due_in(3), task_due_in(-1), task_due_in(10), task_due_in(0)];
        let reminders = get_tasks_with_reminders_on(&tasks, anchor());

        let days: Vec<i64> =
            reminders.iter().map(|t| get_days_until_due_on(t, anchor()).unwrap()).collect();
        assert_eq!(days, vec![-1, 0, 3]);
    }

    #[test]
    fn test_tasks_with_reminders_excludes_dismissed_and_completed() {
        let mut dismissed = task_due_in(1);
        dismissed.reminder_dismissed = true;
        let mut completed = task_due_in(2);
        completed.completed = true;

        let tasks = vec![dismissed, completed, task_due_in(3)];
        let reminders = get_tasks_with_reminders_on(&tasks, anchor());
        assert_eq!(reminders.len(), 1);
        assert_eq!(get_days_until_due_on(&reminders[0], anchor()), Some(3));
    }

    #[test]
    fn test_reminder_intervals_outer_bound() {
        assert_eq!(REMINDER_INTERVALS.iter().copied().max(), Some(7));
        assert_eq!(REMINDER_INTERVALS[0], 7);
    }

    #[test]
    fn test_startup_reminders_same_contract() {
        // Both paths use today's date; with no due dates set, both are empty.
        let tasks = vec![Task::new("a"), Task::new("b")];
        assert_eq!(get_startup_reminders(&tasks), get_tasks_with_reminders(&tasks));
    }
}
