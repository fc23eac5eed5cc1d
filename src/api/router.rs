//! Route table and middleware.

use super::handlers::{
    AppState, change_status, create_task, delete_task, get_task, health_check, list_tasks,
    update_task,
};
use crate::task::ports::TaskRepository;
use axum::{
    Router,
    routing::{get, patch},
};
use mockable::Clock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Builds the application router with request tracing and permissive CORS.
#[must_use]
pub fn router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let api = Router::new()
        .route("/health", get(health_check))
        .route(
            "/tasks",
            get(list_tasks::<R, C>).post(create_task::<R, C>),
        )
        .route(
            "/tasks/{id}",
            get(get_task::<R, C>)
                .put(update_task::<R, C>)
                .delete(delete_task::<R, C>),
        )
        .route("/tasks/{id}/status", patch(change_status::<R, C>));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}
