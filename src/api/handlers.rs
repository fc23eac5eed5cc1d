//! Request handlers for the task endpoints.

use super::{
    ApiErrorResponse,
    dto::{HealthResponse, ListTasksQuery, MessageResponse, StatusRequest, TaskRequest},
};
use crate::task::{
    domain::{Task, TaskDomainError, TaskForm, TaskId},
    ports::TaskRepository,
    services::TaskLifecycleService,
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use mockable::Clock;

/// Shared state handed to every handler.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    tasks: TaskLifecycleService<R, C>,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Wraps the lifecycle service.
    #[must_use]
    pub const fn new(tasks: TaskLifecycleService<R, C>) -> Self {
        Self { tasks }
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
        }
    }
}

type HandlerResult<T> = Result<T, ApiErrorResponse>;

fn task_id(path: Result<Path<i64>, PathRejection>) -> HandlerResult<TaskId> {
    let Path(raw) = path?;
    Ok(TaskId::new(raw))
}

/// `GET /api/tasks`
///
/// Lists tasks, optionally filtered by `priority` and `status` and ordered
/// by `sort`.
///
/// # Errors
///
/// Returns 400 for an unknown parameter value.
pub async fn list_tasks<R, C>(
    State(state): State<AppState<R, C>>,
    Query(params): Query<ListTasksQuery>,
) -> HandlerResult<Json<Vec<Task>>>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let query = params.to_query().map_err(ApiErrorResponse::validation)?;
    Ok(Json(state.tasks.list(query).await?))
}

/// `GET /api/tasks/{id}`
///
/// # Errors
///
/// Returns 404 for an unknown task.
pub async fn get_task<R, C>(
    State(state): State<AppState<R, C>>,
    path: Result<Path<i64>, PathRejection>,
) -> HandlerResult<Json<Task>>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let id = task_id(path)?;
    Ok(Json(state.tasks.get(id).await?))
}

/// `POST /api/tasks`
///
/// # Errors
///
/// Returns 400 with field details when the body does not validate.
pub async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    body: Result<Json<TaskRequest>, JsonRejection>,
) -> HandlerResult<(StatusCode, Json<Task>)>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let Json(request) = body?;
    let task = state.tasks.create(TaskForm::from(request)).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /api/tasks/{id}`
///
/// Replaces the task; `title`, `priority`, and `status` are required.
///
/// # Errors
///
/// Returns 400 for an invalid body and 404 for an unknown task.
pub async fn update_task<R, C>(
    State(state): State<AppState<R, C>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<TaskRequest>, JsonRejection>,
) -> HandlerResult<Json<Task>>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let id = task_id(path)?;
    let Json(request) = body?;
    Ok(Json(state.tasks.update(id, TaskForm::from(request)).await?))
}

/// `PATCH /api/tasks/{id}/status`
///
/// # Errors
///
/// Returns 400 for a missing or unknown status and 404 for an unknown task.
pub async fn change_status<R, C>(
    State(state): State<AppState<R, C>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<StatusRequest>, JsonRejection>,
) -> HandlerResult<Json<Task>>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let id = task_id(path)?;
    let Json(request) = body?;
    let status = request
        .status
        .ok_or_else(|| ApiErrorResponse::from(TaskDomainError::MissingField("status")))?;
    Ok(Json(state.tasks.change_status(id, &status).await?))
}

/// `DELETE /api/tasks/{id}`
///
/// # Errors
///
/// Returns 404 for an unknown task.
pub async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    path: Result<Path<i64>, PathRejection>,
) -> HandlerResult<Json<MessageResponse>>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let id = task_id(path)?;
    state.tasks.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Task deleted successfully".to_owned(),
    }))
}

/// `GET /api/health`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_owned(),
        message: "Task Management API is running".to_owned(),
    })
}
