//! Service layer for task creation, editing, status moves, and removal.

use crate::task::{
    domain::{
        NewTask, Task, TaskDomainError, TaskForm, TaskId, TaskQuery, TaskStatus, ValidationErrors,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Input validation failed; nothing was written.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskLifecycleError {
    /// Returns whether the error reports an unknown task identifier.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(TaskRepositoryError::NotFound(_)))
    }
}

impl From<TaskDomainError> for TaskLifecycleError {
    fn from(error: TaskDomainError) -> Self {
        Self::Validation(ValidationErrors::from(error))
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Validates `form` and stores a new task.
    ///
    /// An absent priority defaults to medium and an absent status to todo.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] before touching the store
    /// when any field is invalid, or [`TaskLifecycleError::Repository`] when
    /// the store rejects the write.
    pub async fn create(&self, form: TaskForm) -> TaskLifecycleResult<Task> {
        let draft = form.into_draft()?;
        let task = self
            .repository
            .store(&NewTask::new(draft, &*self.clock))
            .await?;
        tracing::info!(task_id = %task.id(), status = %task.status(), "task created");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn find(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Retrieves a task that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist.
    pub async fn get(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.find(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }

    /// Lists tasks matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the listing fails.
    pub async fn list(&self, query: TaskQuery) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list(&query).await?)
    }

    /// Replaces every editable field of a task.
    ///
    /// Priority and status must be present in `form`; an absent description
    /// or due date clears the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] for invalid input and
    /// [`TaskRepositoryError::NotFound`] (wrapped) for an unknown task.
    pub async fn update(&self, id: TaskId, form: TaskForm) -> TaskLifecycleResult<Task> {
        let draft = form.into_replacement()?;
        let mut task = self.get(id).await?;
        task.apply(draft, &*self.clock);
        self.repository.update(&task).await?;
        tracing::info!(task_id = %id, "task updated");
        Ok(task)
    }

    /// Moves a task to the column named by `status`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] when `status` is not a
    /// board column and [`TaskRepositoryError::NotFound`] (wrapped) for an
    /// unknown task.
    pub async fn change_status(&self, id: TaskId, status: &str) -> TaskLifecycleResult<Task> {
        let target = TaskStatus::try_from(status).map_err(TaskDomainError::from)?;
        let mut task = self.get(id).await?;
        let from = task.status();
        task.move_to(target, &*self.clock);
        self.repository.update(&task).await?;
        tracing::info!(task_id = %id, %from, to = %target, "task status changed");
        Ok(task)
    }

    /// Permanently deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) for an unknown
    /// task.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        self.repository.delete(id).await?;
        tracing::info!(task_id = %id, "task deleted");
        Ok(())
    }
}
