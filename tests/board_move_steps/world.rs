//! Shared world state for board move BDD scenarios.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::fixture;
use taskboard::{
    client::{BoardClient, GatewayError, GatewayResult, TaskGateway},
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::{Task, TaskDraft, TaskForm, TaskId, TaskQuery, TaskStatus},
        services::{TaskLifecycleError, TaskLifecycleService},
    },
};

/// Service type behind the scenario gateway.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Gateway that calls the lifecycle service in-process and counts status
/// change requests.
pub struct CountingGateway {
    service: TestTaskService,
    status_changes: AtomicU64,
}

impl CountingGateway {
    fn new() -> Self {
        Self {
            service: TaskLifecycleService::new(
                Arc::new(InMemoryTaskRepository::new()),
                Arc::new(DefaultClock),
            ),
            status_changes: AtomicU64::new(0),
        }
    }

    /// Returns how many status changes reached the gateway.
    #[must_use]
    pub fn status_changes(&self) -> u64 {
        self.status_changes.load(Ordering::SeqCst)
    }
}

fn to_gateway_error(id: Option<TaskId>, err: TaskLifecycleError) -> GatewayError {
    match (id, err) {
        (Some(task_id), lifecycle) if lifecycle.is_not_found() => GatewayError::NotFound(task_id),
        (_, TaskLifecycleError::Validation(errors)) => GatewayError::Rejected(errors.to_string()),
        (_, lifecycle) => GatewayError::unavailable(lifecycle),
    }
}

#[async_trait]
impl TaskGateway for CountingGateway {
    async fn fetch_all(&self) -> GatewayResult<Vec<Task>> {
        self.service
            .list(TaskQuery::all())
            .await
            .map_err(|err| to_gateway_error(None, err))
    }

    async fn create(&self, draft: &TaskDraft) -> GatewayResult<Task> {
        self.service
            .create(TaskForm::from(draft))
            .await
            .map_err(|err| to_gateway_error(None, err))
    }

    async fn update(&self, id: TaskId, draft: &TaskDraft) -> GatewayResult<Task> {
        self.service
            .update(id, TaskForm::from(draft))
            .await
            .map_err(|err| to_gateway_error(Some(id), err))
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> GatewayResult<Task> {
        self.status_changes.fetch_add(1, Ordering::SeqCst);
        self.service
            .change_status(id, status.as_str())
            .await
            .map_err(|err| to_gateway_error(Some(id), err))
    }

    async fn delete(&self, id: TaskId) -> GatewayResult<()> {
        self.service
            .delete(id)
            .await
            .map_err(|err| to_gateway_error(Some(id), err))
    }
}

/// Scenario world for board move behaviour tests.
pub struct BoardWorld {
    pub client: BoardClient<CountingGateway>,
    pub last_created_task: Option<Task>,
}

impl BoardWorld {
    /// Creates a world with an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: BoardClient::new(CountingGateway::new()),
            last_created_task: None,
        }
    }

    /// Returns the task most recently created by a step.
    pub fn current_task(&self) -> Result<&Task, eyre::Report> {
        self.last_created_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a column name used in a feature file.
pub fn parse_status(status: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(status).map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}
