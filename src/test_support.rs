//! Shared fixtures for unit tests.

use crate::task::domain::{
    NewTask, PersistedTaskData, Priority, Task, TaskDraft, TaskId, TaskStatus, TaskTitle,
};
use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock that advances one minute on every reading, starting at `base`.
#[derive(Debug)]
pub struct SteppingClock {
    base: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn starting_at(base: DateTime<Utc>) -> Self {
        Self {
            base,
            ticks: AtomicI64::new(0),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::starting_at(at(2024, 12, 1, 9))
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.base + Duration::minutes(tick)
    }
}

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Builder for stored tasks with explicit identifiers and timestamps.
#[derive(Debug, Clone)]
pub struct TaskBuilder {
    id: i64,
    title: String,
    priority: Priority,
    status: TaskStatus,
    due_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
}

pub fn task(id: i64, title: &str) -> TaskBuilder {
    TaskBuilder {
        id,
        title: title.to_owned(),
        priority: Priority::Medium,
        status: TaskStatus::Todo,
        due_date: None,
        created_at: at(2024, 12, 1, 0) + Duration::hours(id),
    }
}

impl TaskBuilder {
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub const fn status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub const fn due(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub const fn created(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> Task {
        let title = TaskTitle::new(self.title).unwrap_or_else(|err| panic!("test title: {err}"));
        Task::from_persisted(PersistedTaskData {
            id: TaskId::new(self.id),
            title,
            description: None,
            priority: self.priority,
            status: self.status,
            due_date: self.due_date,
            created_at: self.created_at,
            updated_at: self.created_at,
        })
    }

    pub fn draft(&self) -> TaskDraft {
        self.clone().build().to_draft()
    }

    pub fn pending(&self, clock: &impl Clock) -> NewTask {
        NewTask::new(self.draft(), clock)
    }
}

pub fn ids(tasks: impl IntoIterator<Item = TaskId>) -> Vec<i64> {
    tasks.into_iter().map(TaskId::value).collect()
}
