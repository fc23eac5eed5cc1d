//! Filter and ordering parameters shared by the store and the board engine.

use super::{ParseQueryError, Priority, Task, TaskStatus};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Priority filter applied before sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PriorityFilter {
    /// Keep every task.
    #[default]
    All,
    /// Keep only tasks with this priority.
    Only(Priority),
}

impl PriorityFilter {
    /// Returns whether a task with `priority` passes the filter.
    #[must_use]
    pub fn admits(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == priority,
        }
    }

    /// Returns the filter as an optional priority.
    #[must_use]
    pub const fn priority(self) -> Option<Priority> {
        match self {
            Self::All => None,
            Self::Only(priority) => Some(priority),
        }
    }
}

impl From<Option<Priority>> for PriorityFilter {
    fn from(value: Option<Priority>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

impl TryFrom<&str> for PriorityFilter {
    type Error = ParseQueryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value == "all" {
            return Ok(Self::All);
        }
        Priority::try_from(value)
            .map(Self::Only)
            .map_err(|_| ParseQueryError::PriorityFilter(value.to_owned()))
    }
}

/// Ordering applied to a task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Newest first.
    #[default]
    Created,
    /// High before medium before low.
    Priority,
    /// Earliest due date first; undated tasks last.
    DueDate,
}

impl SortKey {
    /// Returns the query-string name of the key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Priority => "priority",
            Self::DueDate => "due_date",
        }
    }

    /// Compares two tasks under this key.
    ///
    /// Ties compare equal so that a stable sort keeps the input order.
    #[must_use]
    pub fn compare(self, left: &Task, right: &Task) -> Ordering {
        match self {
            Self::Created => right.created_at().cmp(&left.created_at()),
            Self::Priority => right.priority().rank().cmp(&left.priority().rank()),
            Self::DueDate => match (left.due_date(), right.due_date()) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(left_due), Some(right_due)) => left_due.cmp(&right_due),
            },
        }
    }
}

impl TryFrom<&str> for SortKey {
    type Error = ParseQueryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "created" | "created_at" => Ok(Self::Created),
            "priority" => Ok(Self::Priority),
            "dueDate" | "due_date" => Ok(Self::DueDate),
            _ => Err(ParseQueryError::SortKey(value.to_owned())),
        }
    }
}

/// Store-side listing parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskQuery {
    /// Keep only tasks with this priority.
    pub priority: Option<Priority>,
    /// Keep only tasks in this column.
    pub status: Option<TaskStatus>,
    /// Result ordering. Ties on the key fall back to newest first.
    pub sort: SortKey,
}

impl TaskQuery {
    /// Returns a query that lists every task, newest first.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts the query to one priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts the query to one status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the ordering.
    #[must_use]
    pub const fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Returns whether `task` passes the priority and status filters.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.priority.is_none_or(|priority| task.priority() == priority)
            && self.status.is_none_or(|status| task.status() == status)
    }

    /// Compares two tasks under the store ordering.
    #[must_use]
    pub fn compare(&self, left: &Task, right: &Task) -> Ordering {
        self.sort
            .compare(left, right)
            .then_with(|| SortKey::Created.compare(left, right))
    }
}
