//! Error types for task domain validation and parsing.

use std::fmt;
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("title is required")]
    EmptyTitle,

    /// The title exceeds the maximum length.
    #[error("title is {0} characters long, at most 255 are allowed")]
    TitleTooLong(usize),

    /// The priority value is not one of the supported levels.
    #[error(transparent)]
    InvalidPriority(#[from] ParsePriorityError),

    /// The status value is not one of the supported columns.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// The due date is not an ISO-8601 date or timestamp.
    #[error("invalid due date '{0}', expected an ISO-8601 date")]
    InvalidDueDate(String),

    /// A required field was not supplied.
    #[error("{0} is required")]
    MissingField(&'static str),
}

impl TaskDomainError {
    /// Returns the name of the request field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyTitle | Self::TitleTooLong(_) => "title",
            Self::InvalidPriority(_) => "priority",
            Self::InvalidStatus(_) => "status",
            Self::InvalidDueDate(_) => "due_date",
            Self::MissingField(field) => field,
        }
    }
}

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid priority '{0}', expected low, medium, or high")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid status '{0}', expected todo, inprogress, or completed")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing board query parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseQueryError {
    /// The priority filter is not `all` or a priority level.
    #[error("invalid priority filter '{0}', expected all, low, medium, or high")]
    PriorityFilter(String),

    /// The sort key is not recognised.
    #[error("invalid sort key '{0}', expected created, priority, or dueDate")]
    SortKey(String),
}

/// Every field violation found while validating one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<TaskDomainError>);

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Records a violation.
    pub fn push(&mut self, error: TaskDomainError) {
        self.0.push(error);
    }

    /// Returns whether no violation was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether `error` was recorded.
    #[must_use]
    pub fn contains(&self, error: &TaskDomainError) -> bool {
        self.0.contains(error)
    }

    /// Iterates over the recorded violations in the order they were found.
    pub fn iter(&self) -> std::slice::Iter<'_, TaskDomainError> {
        self.0.iter()
    }

    /// Converts the collection into `Ok(value)` when empty, `Err(self)`
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one violation was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl From<TaskDomainError> for ValidationErrors {
    fn from(error: TaskDomainError) -> Self {
        Self(vec![error])
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a TaskDomainError;
    type IntoIter = std::slice::Iter<'a, TaskDomainError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = "";
        for error in &self.0 {
            write!(f, "{separator}{error}")?;
            separator = "; ";
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
