//! Domain-focused tests for task values, queries, and the aggregate.

use crate::task::domain::{
    ParsePriorityError, ParseQueryError, ParseTaskStatusError, Priority, PriorityFilter, SortKey,
    Task, TaskDomainError, TaskQuery, TaskStatus, TaskTitle, parse_due_date,
};
use crate::test_support::{SteppingClock, at, date, task};
use rstest::rstest;
use std::cmp::Ordering;

#[rstest]
fn title_is_trimmed() {
    let title = TaskTitle::new("  Write report \n").expect("valid title");
    assert_eq!(title.as_str(), "Write report");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn title_rejects_blank_input(#[case] raw: &str) {
    assert_eq!(TaskTitle::new(raw), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn title_rejects_more_than_255_characters() {
    assert!(TaskTitle::new("é".repeat(255)).is_ok());
    assert_eq!(
        TaskTitle::new("x".repeat(256)),
        Err(TaskDomainError::TitleTooLong(256))
    );
}

#[rstest]
fn duplicate_key_ignores_case_and_surrounding_space() {
    let left = TaskTitle::new("Buy milk").expect("valid title");
    let right = TaskTitle::new("  buy MILK ").expect("valid title");
    assert_eq!(left.duplicate_key(), right.duplicate_key());
}

#[rstest]
#[case("low", Priority::Low)]
#[case("medium", Priority::Medium)]
#[case("high", Priority::High)]
fn priority_parses_wire_names(#[case] raw: &str, #[case] expected: Priority) {
    assert_eq!(Priority::try_from(raw), Ok(expected));
}

#[rstest]
#[case("urgent")]
#[case("HIGH")]
#[case(" high ")]
fn priority_rejects_values_outside_the_enum(#[case] raw: &str) {
    assert_eq!(
        Priority::try_from(raw),
        Err(ParsePriorityError(raw.to_owned()))
    );
}

#[rstest]
#[case("todo", TaskStatus::Todo)]
#[case("inprogress", TaskStatus::InProgress)]
#[case("completed", TaskStatus::Completed)]
fn status_parses_wire_names(#[case] raw: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(raw), Ok(expected));
    assert_eq!(TaskStatus::try_from(expected.as_str()), Ok(expected));
}

#[rstest]
#[case("done")]
#[case("Completed")]
#[case(" completed ")]
#[case("in-progress")]
fn status_rejects_values_outside_the_enum(#[case] raw: &str) {
    assert_eq!(
        TaskStatus::try_from(raw),
        Err(ParseTaskStatusError(raw.to_owned()))
    );
}

#[rstest]
fn status_serialises_as_lowercase_wire_name() {
    let json = serde_json::to_string(&TaskStatus::InProgress).expect("serialise status");
    assert_eq!(json, "\"inprogress\"");
}

#[rstest]
fn status_column_titles_follow_board_order() {
    let titles = TaskStatus::ALL.map(TaskStatus::column_title);
    assert_eq!(titles, ["To Do", "In Progress", "Completed"]);
}

#[rstest]
#[case("2024-12-01", Some(date(2024, 12, 1)))]
#[case("2024-12-01T23:30:00Z", Some(date(2024, 12, 1)))]
#[case("2024-12-01T08:00:00+02:00", Some(date(2024, 12, 1)))]
#[case("", None)]
#[case("   ", None)]
fn due_date_accepts_iso_forms(
    #[case] raw: &str,
    #[case] expected: Option<chrono::NaiveDate>,
) {
    assert_eq!(parse_due_date(raw), Ok(expected));
}

#[rstest]
#[case("tomorrow")]
#[case("2024-13-01")]
#[case("01/12/2024")]
fn due_date_rejects_other_forms(#[case] raw: &str) {
    assert_eq!(
        parse_due_date(raw),
        Err(TaskDomainError::InvalidDueDate(raw.to_owned()))
    );
}

#[rstest]
#[case(TaskStatus::Todo, date(2024, 11, 30), true)]
#[case(TaskStatus::InProgress, date(2024, 11, 30), true)]
#[case(TaskStatus::Completed, date(2024, 11, 30), false)]
#[case(TaskStatus::Todo, date(2024, 12, 1), false)]
#[case(TaskStatus::Todo, date(2024, 12, 2), false)]
fn overdue_needs_past_due_date_and_open_status(
    #[case] status: TaskStatus,
    #[case] due: chrono::NaiveDate,
    #[case] expected: bool,
) {
    let task = task(1, "Pay rent").status(status).due(due).build();
    assert_eq!(task.is_overdue(date(2024, 12, 1)), expected);
}

#[rstest]
fn undated_task_is_never_overdue() {
    assert!(!task(1, "Someday").build().is_overdue(date(2030, 1, 1)));
}

#[rstest]
fn move_to_keeps_identity_and_refreshes_updated_at() {
    let clock = SteppingClock::starting_at(at(2025, 1, 1, 0));
    let mut moved: Task = task(4, "Ship it").build();
    let before = moved.clone();

    moved.move_to(TaskStatus::Completed, &clock);

    assert_eq!(moved.id(), before.id());
    assert_eq!(moved.created_at(), before.created_at());
    assert_eq!(moved.status(), TaskStatus::Completed);
    assert_eq!(moved.updated_at(), at(2025, 1, 1, 0));
}

#[rstest]
fn apply_replaces_every_editable_field() {
    let clock = SteppingClock::default();
    let mut edited = task(2, "Draft").due(date(2024, 12, 24)).build();
    let replacement = task(99, "Final")
        .priority(Priority::High)
        .status(TaskStatus::InProgress)
        .build()
        .to_draft();

    edited.apply(replacement, &clock);

    assert_eq!(edited.id().value(), 2);
    assert_eq!(edited.title().as_str(), "Final");
    assert_eq!(edited.priority(), Priority::High);
    assert_eq!(edited.status(), TaskStatus::InProgress);
    assert_eq!(edited.due_date(), None);
}

#[rstest]
#[case("all", PriorityFilter::All)]
#[case("high", PriorityFilter::Only(Priority::High))]
fn priority_filter_parses(#[case] raw: &str, #[case] expected: PriorityFilter) {
    assert_eq!(PriorityFilter::try_from(raw), Ok(expected));
}

#[rstest]
#[case("ALL")]
#[case("High")]
fn priority_filter_is_case_sensitive(#[case] raw: &str) {
    assert_eq!(
        PriorityFilter::try_from(raw),
        Err(ParseQueryError::PriorityFilter(raw.to_owned()))
    );
}

#[rstest]
fn priority_filter_rejects_unknown_value() {
    assert_eq!(
        PriorityFilter::try_from("urgent"),
        Err(ParseQueryError::PriorityFilter("urgent".to_owned()))
    );
}

#[rstest]
#[case("created", SortKey::Created)]
#[case("created_at", SortKey::Created)]
#[case("priority", SortKey::Priority)]
#[case("dueDate", SortKey::DueDate)]
#[case("due_date", SortKey::DueDate)]
fn sort_key_parses(#[case] raw: &str, #[case] expected: SortKey) {
    assert_eq!(SortKey::try_from(raw), Ok(expected));
}

#[rstest]
fn sort_key_rejects_unknown_value() {
    assert_eq!(
        SortKey::try_from("title"),
        Err(ParseQueryError::SortKey("title".to_owned()))
    );
}

#[rstest]
fn due_date_order_puts_undated_tasks_last() {
    let dated = task(1, "Dated").due(date(2024, 12, 5)).build();
    let undated = task(2, "Undated").build();
    let also_undated = task(3, "Also undated").build();

    assert_eq!(SortKey::DueDate.compare(&dated, &undated), Ordering::Less);
    assert_eq!(SortKey::DueDate.compare(&undated, &dated), Ordering::Greater);
    assert_eq!(
        SortKey::DueDate.compare(&undated, &also_undated),
        Ordering::Equal
    );
}

#[rstest]
fn priority_order_ranks_high_first() {
    let high = task(1, "High").priority(Priority::High).build();
    let low = task(2, "Low").priority(Priority::Low).build();
    assert_eq!(SortKey::Priority.compare(&high, &low), Ordering::Less);
}

#[rstest]
fn query_breaks_ties_by_newest_first() {
    let older = task(1, "Older").priority(Priority::High).build();
    let newer = task(2, "Newer").priority(Priority::High).build();
    let query = TaskQuery::all().sorted_by(SortKey::Priority);
    assert_eq!(query.compare(&newer, &older), Ordering::Less);
}

#[rstest]
fn query_matches_on_priority_and_status() {
    let query = TaskQuery::all()
        .with_priority(Priority::High)
        .with_status(TaskStatus::Todo);
    assert!(query.matches(&task(1, "A").priority(Priority::High).build()));
    assert!(!query.matches(&task(2, "B").build()));
    assert!(
        !query.matches(
            &task(3, "C")
                .priority(Priority::High)
                .status(TaskStatus::Completed)
                .build()
        )
    );
}

#[rstest]
fn task_serialises_with_snake_case_fields() {
    let json = serde_json::to_value(task(7, "Read").due(date(2024, 12, 3)).build())
        .expect("serialise task");
    assert_eq!(json["id"], 7);
    assert_eq!(json["title"], "Read");
    assert_eq!(json["priority"], "medium");
    assert_eq!(json["status"], "todo");
    assert_eq!(json["due_date"], "2024-12-03");
    assert!(json["description"].is_null());
}
