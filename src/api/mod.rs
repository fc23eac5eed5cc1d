//! HTTP interface to the task store.
//!
//! The router exposes the task collection under `/api`, translating JSON
//! bodies into [`crate::task::domain::TaskForm`] values and lifecycle errors
//! into conventional status codes.

pub mod dto;
mod error;
mod handlers;
mod router;

pub use error::{ApiError, ApiErrorResponse, FieldError};
pub use handlers::{
    AppState, change_status, create_task, delete_task, get_task, health_check, list_tasks,
    update_task,
};
pub use router::router;

#[cfg(test)]
mod tests;
