//! Request and response bodies for the task endpoints.
//!
//! Tasks themselves are serialised directly from
//! [`crate::task::domain::Task`], whose field names already follow the
//! snake_case wire format.

use super::FieldError;
use crate::task::domain::{
    PriorityFilter, SortKey, TaskDomainError, TaskDraft, TaskForm, TaskQuery, TaskStatus,
};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/tasks` and `PUT /api/tasks/{id}`.
///
/// Every field is optional at the JSON level so that missing and malformed
/// values are reported together by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRequest {
    /// Task title.
    #[serde(default)]
    pub title: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `low`, `medium`, or `high`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// `todo`, `inprogress`, or `completed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// ISO-8601 date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Body of `POST /api/tasks`.
pub type CreateTaskRequest = TaskRequest;

/// Body of `PUT /api/tasks/{id}`.
pub type UpdateTaskRequest = TaskRequest;

impl From<TaskRequest> for TaskForm {
    fn from(request: TaskRequest) -> Self {
        let TaskRequest {
            title,
            description,
            priority,
            status,
            due_date,
        } = request;
        let mut form = Self::new(title);
        if let Some(value) = description {
            form = form.with_description(value);
        }
        if let Some(value) = priority {
            form = form.with_priority(value);
        }
        if let Some(value) = status {
            form = form.with_status(value);
        }
        if let Some(value) = due_date {
            form = form.with_due_date(value);
        }
        form
    }
}

impl From<&TaskDraft> for TaskRequest {
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

/// Body of `PATCH /api/tasks/{id}/status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRequest {
    /// Target column.
    #[serde(default)]
    pub status: Option<String>,
}

/// Query string of `GET /api/tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTasksQuery {
    /// `all` or a priority level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// A status column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// `created`, `priority`, or `due_date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl ListTasksQuery {
    /// Builds the query string for `query`.
    #[must_use]
    pub fn from_query(query: &TaskQuery) -> Self {
        Self {
            priority: query.priority.map(|priority| priority.as_str().to_owned()),
            status: query.status.map(|status| status.as_str().to_owned()),
            sort: Some(query.sort.as_str().to_owned()),
        }
    }

    /// Parses the parameters into a store query.
    ///
    /// # Errors
    ///
    /// Returns one [`FieldError`] per unrecognised parameter. Empty or blank
    /// parameters are treated as absent.
    pub fn to_query(&self) -> Result<TaskQuery, Vec<FieldError>> {
        let mut errors = Vec::new();
        let mut query = TaskQuery::all();

        if let Some(raw) = non_blank(self.priority.as_deref()) {
            match PriorityFilter::try_from(raw) {
                Ok(filter) => query.priority = filter.priority(),
                Err(err) => errors.push(FieldError::new("priority", err.to_string())),
            }
        }
        if let Some(raw) = non_blank(self.status.as_deref()) {
            match TaskStatus::try_from(raw) {
                Ok(status) => query.status = Some(status),
                Err(err) => errors.push(FieldError::new("status", err.to_string())),
            }
        }
        if let Some(raw) = non_blank(self.sort.as_deref()) {
            match SortKey::try_from(raw) {
                Ok(sort) => query.sort = sort,
                Err(err) => errors.push(FieldError::new("sort", err.to_string())),
            }
        }

        if errors.is_empty() { Ok(query) } else { Err(errors) }
    }
}

/// Body returned by `DELETE /api/tasks/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

/// Body returned by `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `OK` while the server is accepting requests.
    pub status: String,
    /// Human-readable service description.
    pub message: String,
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.trim().is_empty())
}

impl From<&TaskDomainError> for FieldError {
    fn from(error: &TaskDomainError) -> Self {
        Self::new(error.field(), error.to_string())
    }
}
