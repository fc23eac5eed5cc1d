//! Unvalidated task input as typed by a user or received over HTTP.

use super::{
    Priority, TaskDomainError, TaskDraft, TaskStatus, TaskTitle, ValidationErrors, parse_due_date,
};

/// Raw task fields awaiting validation.
///
/// Every field is kept as text so that validation can report all problems
/// at once instead of failing on the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    title: String,
    description: Option<String>,
    priority: Option<String>,
    status: Option<String>,
    due_date: Option<String>,
}

impl TaskForm {
    /// Creates a form with only a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority text.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the status text.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the due date text.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Validates the form, filling an absent priority or status with its
    /// default.
    ///
    /// # Errors
    ///
    /// Returns every violation found.
    pub fn into_draft(self) -> Result<TaskDraft, ValidationErrors> {
        self.validate(false)
    }

    /// Validates the form as a full replacement of an existing task, where
    /// priority and status must be given explicitly.
    ///
    /// # Errors
    ///
    /// Returns every violation found, including
    /// [`TaskDomainError::MissingField`] for an absent priority or status.
    pub fn into_replacement(self) -> Result<TaskDraft, ValidationErrors> {
        self.validate(true)
    }

    fn validate(self, require_enums: bool) -> Result<TaskDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = TaskTitle::new(self.title).map_err(|err| errors.push(err)).ok();
        let priority = parse_field(
            self.priority.as_deref(),
            require_enums,
            "priority",
            |raw| Priority::try_from(raw).map_err(TaskDomainError::from),
            &mut errors,
        );
        let status = parse_field(
            self.status.as_deref(),
            require_enums,
            "status",
            |raw| TaskStatus::try_from(raw).map_err(TaskDomainError::from),
            &mut errors,
        );
        let due_date = match self.due_date.as_deref().map(parse_due_date).transpose() {
            Ok(parsed) => parsed.flatten(),
            Err(err) => {
                errors.push(err);
                None
            }
        };

        let (Some(title), Some(priority), Some(status)) = (title, priority, status) else {
            return Err(errors);
        };
        let mut draft = TaskDraft::new(title)
            .with_priority(priority)
            .with_status(status);
        if let Some(description) = self.description {
            draft = draft.with_description(description);
        }
        if let Some(due) = due_date {
            draft = draft.with_due_date(due);
        }
        errors.into_result(draft)
    }
}

impl From<&TaskDraft> for TaskForm {
    fn from(draft: &TaskDraft) -> Self {
        Self {
            title: draft.title().as_str().to_owned(),
            description: draft.description().map(str::to_owned),
            priority: Some(draft.priority().as_str().to_owned()),
            status: Some(draft.status().as_str().to_owned()),
            due_date: draft.due_date().map(|due| due.to_string()),
        }
    }
}

/// Parses an enum field, using its default when absent and not required.
fn parse_field<T: Default>(
    raw: Option<&str>,
    required: bool,
    field: &'static str,
    parse: impl FnOnce(&str) -> Result<T, TaskDomainError>,
    errors: &mut ValidationErrors,
) -> Option<T> {
    match raw {
        Some(value) => parse(value).map_err(|err| errors.push(err)).ok(),
        None if required => {
            errors.push(TaskDomainError::MissingField(field));
            None
        }
        None => Some(T::default()),
    }
}
