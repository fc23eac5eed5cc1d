//! Snapshot-holding client that the board UI drives.

use super::{GatewayError, TaskGateway};
use crate::board::{BoardView, DragOutcome, plan_move};
use crate::task::domain::{
    PriorityFilter, SortKey, Task, TaskForm, TaskId, TaskStatus, ValidationErrors,
};
use chrono::NaiveDate;
use thiserror::Error;

/// Failures surfaced to the board.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The form did not validate; the gateway was not called.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The task no longer exists; the snapshot has been reloaded.
    #[error("task {0} not found")]
    NotFound(TaskId),

    /// The collection refused the request.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The collection could not be reached; the snapshot is unchanged.
    #[error(transparent)]
    Unavailable(GatewayError),
}

/// Result type for board client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Client holding the board's copy of the task collection.
///
/// Each method is awaited to completion before the next is issued, so the
/// snapshot only ever reflects the most recent successful reload.
#[derive(Debug)]
pub struct BoardClient<G: TaskGateway> {
    gateway: G,
    snapshot: Vec<Task>,
}

impl<G: TaskGateway> BoardClient<G> {
    /// Creates a client with an empty snapshot.
    #[must_use]
    pub const fn new(gateway: G) -> Self {
        Self {
            gateway,
            snapshot: Vec::new(),
        }
    }

    /// Returns the gateway.
    #[must_use]
    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Returns the last loaded tasks.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.snapshot
    }

    /// Replaces the snapshot with the current collection.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Unavailable`] and keeps the old snapshot when
    /// the fetch fails.
    pub async fn reload(&mut self) -> ClientResult<()> {
        match self.gateway.fetch_all().await {
            Ok(tasks) => {
                self.snapshot = tasks;
                Ok(())
            }
            Err(err) => Err(self.surface(err).await),
        }
    }

    /// Validates `form` and creates a task from it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] without contacting the gateway
    /// when the form is invalid.
    pub async fn create(&mut self, form: TaskForm) -> ClientResult<Task> {
        let draft = form.into_draft()?;
        let outcome = self.gateway.create(&draft).await;
        self.finish(outcome).await
    }

    /// Validates `form` and replaces the task's fields with it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] without contacting the gateway
    /// when the form is invalid, and [`ClientError::NotFound`] when the task
    /// has been deleted.
    pub async fn update(&mut self, id: TaskId, form: TaskForm) -> ClientResult<Task> {
        let draft = form.into_replacement()?;
        let outcome = self.gateway.update(id, &draft).await;
        self.finish(outcome).await
    }

    /// Moves a task to the column for `status`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] when the task has been deleted.
    pub async fn change_status(&mut self, id: TaskId, status: TaskStatus) -> ClientResult<Task> {
        let outcome = self.gateway.update_status(id, status).await;
        self.finish(outcome).await
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] when the task was already deleted.
    pub async fn delete(&mut self, id: TaskId) -> ClientResult<()> {
        let outcome = self.gateway.delete(id).await;
        self.finish(outcome).await
    }

    /// Applies a finished drag gesture.
    ///
    /// Returns the moved task, or `None` when the gesture was cancelled or
    /// ended in its source column.
    ///
    /// # Errors
    ///
    /// Fails as [`Self::change_status`] does.
    pub async fn apply_drag(&mut self, outcome: &DragOutcome) -> ClientResult<Option<Task>> {
        let Some(change) = plan_move(outcome) else {
            return Ok(None);
        };
        self.change_status(change.task_id, change.status)
            .await
            .map(Some)
    }

    /// Arranges the snapshot for display.
    #[must_use]
    pub fn view(&self, filter: PriorityFilter, sort: SortKey, today: NaiveDate) -> BoardView {
        BoardView::build(&self.snapshot, filter, sort, today)
    }

    async fn finish<T>(&mut self, outcome: Result<T, GatewayError>) -> ClientResult<T> {
        match outcome {
            Ok(value) => {
                match self.gateway.fetch_all().await {
                    Ok(tasks) => self.snapshot = tasks,
                    Err(err) => tracing::warn!(error = %err, "reload after mutation failed"),
                }
                Ok(value)
            }
            Err(err) => Err(self.surface(err).await),
        }
    }

    async fn surface(&mut self, err: GatewayError) -> ClientError {
        match err {
            GatewayError::NotFound(id) => {
                tracing::info!(task_id = %id, "task vanished, reloading");
                match self.gateway.fetch_all().await {
                    Ok(tasks) => self.snapshot = tasks,
                    Err(reload) => tracing::warn!(
                        task_id = %id,
                        error = %reload,
                        "reload after not found failed"
                    ),
                }
                ClientError::NotFound(id)
            }
            GatewayError::Rejected(message) => ClientError::Rejected(message),
            err @ (GatewayError::UnexpectedStatus(_) | GatewayError::Unavailable(_)) => {
                tracing::warn!(error = %err, "task collection unavailable");
                ClientError::Unavailable(err)
            }
        }
    }
}
