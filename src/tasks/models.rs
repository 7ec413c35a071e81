//! Task model types for the todo core.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum length of a task title, in characters.
///
/// Longer titles are truncated silently, never rejected.
pub const TITLE_MAX_LEN: usize = 200;

/// Task priority levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// High priority.
    High,
    /// Medium priority.
    Medium,
    /// Low priority.
    Low,
}

impl Priority {
    /// Parse a priority from a string.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the string is not a valid priority.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(Error::InvalidArgument(format!(
                "priority must be one of: high, medium, low (got '{s}')"
            ))),
        }
    }

    /// Get the string representation of the priority.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Work-related tasks.
    Work,
    /// Household tasks.
    Home,
    /// Personal tasks.
    Personal,
}

impl Category {
    /// Parse a category from a string.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the string is not a valid category.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "work" => Ok(Self::Work),
            "home" => Ok(Self::Home),
            "personal" => Ok(Self::Personal),
            _ => Err(Error::InvalidArgument(format!(
                "category must be one of: work, home, personal (got '{s}')"
            ))),
        }
    }

    /// Get the string representation of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Home => "home",
            Self::Personal => "personal",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recurrence schedule options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    /// Not recurring (default).
    #[default]
    None,
    /// Repeats every day.
    Daily,
    /// Repeats every week.
    Weekly,
    /// Repeats every month.
    Monthly,
}

impl Recurrence {
    /// Parse a recurrence schedule from a string.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the string is not a valid schedule.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(Error::InvalidArgument(format!(
                "recurrence must be one of: none, daily, weekly, monthly (got '{s}')"
            ))),
        }
    }

    /// Get the string representation of the schedule.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl std::fmt::Display for Recurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a due date from a `YYYY-MM-DD` string.
///
/// # Errors
///
/// Returns `Error::InvalidDate` if the string is not a valid calendar date.
pub fn parse_due_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| Error::InvalidDate(s.to_string()))
}

/// Validate a title at the input boundary.
///
/// The entity itself never rejects a title; this check belongs to the command
/// layer, before a `Task` is constructed.
///
/// # Errors
///
/// Returns `Error::EmptyTitle` if the title is empty or whitespace-only.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::EmptyTitle);
    }
    Ok(())
}

/// Truncate a title to `TITLE_MAX_LEN` characters.
///
/// Counts `char`s, so a multi-byte code point is never split.
fn truncate_title(title: String) -> String {
    if title.chars().count() <= TITLE_MAX_LEN {
        return title;
    }
    title.chars().take(TITLE_MAX_LEN).collect()
}

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier assigned by storage. 0 means "not yet assigned".
    pub id: u32,
    /// Task title, at most `TITLE_MAX_LEN` characters.
    pub title: String,
    /// Completion status.
    pub completed: bool,
    /// Priority level. `None` means no priority.
    pub priority: Option<Priority>,
    /// Category label.
    pub category: Option<Category>,
    /// Due date (calendar date, no time of day).
    pub due_date: Option<NaiveDate>,
    /// Recurrence schedule.
    pub recurrence: Recurrence,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// When the task was last modified.
    pub modified_at: DateTime<Utc>,
    /// Whether the due-date reminder has been dismissed.
    pub reminder_dismissed: bool,
}

impl Task {
    /// Create a new unsaved task with the given title.
    ///
    /// The id is left at the 0 sentinel until storage assigns one. The title
    /// is truncated to `TITLE_MAX_LEN` characters if necessary.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            title: truncate_title(title.into()),
            completed: false,
            priority: None,
            category: None,
            due_date: None,
            recurrence: Recurrence::None,
            created_at: now,
            modified_at: now,
            reminder_dismissed: false,
        }
    }

    /// Update the modified timestamp.
    fn mark_modified(&mut self) {
        self.modified_at = Utc::now();
    }

    /// Toggle completion status and return the new status.
    pub fn toggle_complete(&mut self) -> bool {
        self.completed = !self.completed;
        self.mark_modified();
        self.completed
    }

    /// Update the task title, re-applying the truncation rule.
    pub fn update_title(&mut self, new_title: impl Into<String>) {
        self.title = truncate_title(new_title.into());
        self.mark_modified();
    }

    /// Update the task priority.
    pub fn update_priority(&mut self, priority: Option<Priority>) {
        self.priority = priority;
        self.mark_modified();
    }

    /// Update the task category.
    pub fn update_category(&mut self, category: Option<Category>) {
        self.category = category;
        self.mark_modified();
    }

    /// Update the task due date.
    pub fn update_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.due_date = due_date;
        self.mark_modified();
    }

    /// Update the recurrence schedule.
    pub fn update_recurrence(&mut self, recurrence: Recurrence) {
        self.recurrence = recurrence;
        self.mark_modified();
    }

    /// Dismiss the reminder for this task.
    pub fn dismiss_reminder(&mut self) {
        self.reminder_dismissed = true;
        self.mark_modified();
    }

    /// Reset the reminder dismissed state.
    pub fn reset_reminder(&mut self) {
        self.reminder_dismissed = false;
        self.mark_modified();
    }
}
