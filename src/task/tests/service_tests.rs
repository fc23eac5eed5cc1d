//! Service orchestration tests for the task lifecycle.

use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Priority, TaskDomainError, TaskForm, TaskId, TaskQuery, TaskStatus},
    ports::TaskRepository,
    services::{TaskLifecycleError, TaskLifecycleService},
};
use crate::test_support::{SteppingClock, at, date};
use rstest::{fixture, rstest};

type TestService = TaskLifecycleService<InMemoryTaskRepository, SteppingClock>;

struct Harness {
    repository: Arc<InMemoryTaskRepository>,
    service: TestService,
}

#[fixture]
fn harness() -> Harness {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let service = TaskLifecycleService::new(
        Arc::clone(&repository),
        Arc::new(SteppingClock::starting_at(at(2024, 12, 1, 9))),
    );
    Harness {
        repository,
        service,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_persists_and_is_retrievable(harness: Harness) {
    let created = harness
        .service
        .create(
            TaskForm::new("Buy milk")
                .with_priority("high")
                .with_due_date("2024-12-05"),
        )
        .await
        .expect("task creation should succeed");

    let fetched = harness.service.get(created.id()).await.expect("lookup");

    assert_eq!(fetched, created);
    assert_eq!(created.priority(), Priority::High);
    assert_eq!(created.status(), TaskStatus::Todo);
    assert_eq!(created.due_date(), Some(date(2024, 12, 5)));
    assert_eq!(created.created_at(), at(2024, 12, 1, 9));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_invalid_form_without_storing(harness: Harness) {
    let result = harness
        .service
        .create(TaskForm::new("   ").with_priority("urgent"))
        .await;

    let Err(TaskLifecycleError::Validation(errors)) = result else {
        panic!("expected validation failure");
    };
    assert!(errors.contains(&TaskDomainError::EmptyTitle));
    let stored = harness
        .repository
        .list(&TaskQuery::all())
        .await
        .expect("list");
    assert!(stored.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_unknown_task_is_not_found(harness: Harness) {
    let result = harness.service.get(TaskId::new(404)).await;
    assert!(result.is_err_and(|err| err.is_not_found()));

    let found = harness.service.find(TaskId::new(404)).await.expect("lookup");
    assert!(found.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_fields_and_keeps_creation_time(harness: Harness) {
    let created = harness
        .service
        .create(
            TaskForm::new("Draft")
                .with_description("first pass")
                .with_due_date("2024-12-10"),
        )
        .await
        .expect("create");

    let updated = harness
        .service
        .update(
            created.id(),
            TaskForm::new("Final")
                .with_priority("low")
                .with_status("inprogress"),
        )
        .await
        .expect("update");

    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.title().as_str(), "Final");
    assert_eq!(updated.description(), None);
    assert_eq!(updated.due_date(), None);
    assert_eq!(updated.status(), TaskStatus::InProgress);
    assert_eq!(updated.created_at(), created.created_at());
    assert!(updated.updated_at() > created.updated_at());
    assert_eq!(
        harness.service.get(created.id()).await.expect("lookup"),
        updated
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_requires_priority_and_status(harness: Harness) {
    let created = harness
        .service
        .create(TaskForm::new("Keep"))
        .await
        .expect("create");

    let result = harness
        .service
        .update(created.id(), TaskForm::new("Changed"))
        .await;

    assert!(matches!(result, Err(TaskLifecycleError::Validation(_))));
    let unchanged = harness.service.get(created.id()).await.expect("lookup");
    assert_eq!(unchanged.title().as_str(), "Keep");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_unknown_task_is_not_found(harness: Harness) {
    let result = harness
        .service
        .update(
            TaskId::new(9),
            TaskForm::new("Nobody").with_priority("low").with_status("todo"),
        )
        .await;
    assert!(result.is_err_and(|err| err.is_not_found()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn change_status_moves_between_any_columns(harness: Harness) {
    let created = harness
        .service
        .create(TaskForm::new("Walk dog").with_status("completed"))
        .await
        .expect("create");

    let reopened = harness
        .service
        .change_status(created.id(), "todo")
        .await
        .expect("status change");

    assert_eq!(reopened.status(), TaskStatus::Todo);
    assert_eq!(reopened.title(), created.title());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn change_status_rejects_unknown_column(harness: Harness) {
    let created = harness
        .service
        .create(TaskForm::new("Walk dog"))
        .await
        .expect("create");

    let result = harness.service.change_status(created.id(), "archived").await;

    let Err(TaskLifecycleError::Validation(errors)) = result else {
        panic!("expected validation failure");
    };
    assert_eq!(
        errors.iter().map(TaskDomainError::field).collect::<Vec<_>>(),
        ["status"]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_is_permanent(harness: Harness) {
    let created = harness
        .service
        .create(TaskForm::new("Throw away"))
        .await
        .expect("create");

    harness.service.delete(created.id()).await.expect("delete");

    let again = harness.service.delete(created.id()).await;
    assert!(again.is_err_and(|err| err.is_not_found()));
    let listed = harness.service.list(TaskQuery::all()).await.expect("list");
    assert!(listed.is_empty());
}
