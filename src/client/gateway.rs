//! Transport contract between the board client and the task collection.

use crate::task::domain::{Task, TaskDraft, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Access to a task collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Fetches every task.
    async fn fetch_all(&self) -> GatewayResult<Vec<Task>>;

    /// Stores a new task and returns it with its identifier.
    async fn create(&self, draft: &TaskDraft) -> GatewayResult<Task>;

    /// Replaces every editable field of a task.
    async fn update(&self, id: TaskId, draft: &TaskDraft) -> GatewayResult<Task>;

    /// Moves a task to another column.
    async fn update_status(&self, id: TaskId, status: TaskStatus) -> GatewayResult<Task>;

    /// Permanently deletes a task.
    async fn delete(&self, id: TaskId) -> GatewayResult<()>;
}

/// Failures reported by a gateway.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The collection has no task with this identifier.
    #[error("task {0} not found")]
    NotFound(TaskId),

    /// The collection refused the request as invalid.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The collection answered with an unexpected status code.
    #[error("unexpected response status {0}")]
    UnexpectedStatus(u16),

    /// The collection could not be reached or read.
    #[error("task collection unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl GatewayError {
    /// Wraps a transport or storage failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
