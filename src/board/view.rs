//! Column partition, summary statistics, and the assembled board view.

use super::{BoardEntry, arrange};
use crate::task::domain::{PriorityFilter, SortKey, Task, TaskId, TaskStatus};
use chrono::NaiveDate;
use std::collections::HashSet;

/// One status column and its entries in board order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn {
    status: TaskStatus,
    entries: Vec<BoardEntry>,
}

impl BoardColumn {
    const fn empty(status: TaskStatus) -> Self {
        Self {
            status,
            entries: Vec::new(),
        }
    }

    /// Returns the status this column holds.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the display title, e.g. "In Progress".
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.status.column_title()
    }

    /// Returns the entries in board order.
    #[must_use]
    pub fn entries(&self) -> &[BoardEntry] {
        &self.entries
    }

    /// Returns the identifiers of the entries in board order.
    #[must_use]
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.entries.iter().map(|entry| entry.task().id()).collect()
    }
}

/// The three board columns: to do, in progress, completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumns {
    todo: BoardColumn,
    in_progress: BoardColumn,
    completed: BoardColumn,
}

impl BoardColumns {
    /// Groups entries by status, keeping their relative order.
    #[must_use]
    pub fn partition(entries: impl IntoIterator<Item = BoardEntry>) -> Self {
        let mut columns = Self {
            todo: BoardColumn::empty(TaskStatus::Todo),
            in_progress: BoardColumn::empty(TaskStatus::InProgress),
            completed: BoardColumn::empty(TaskStatus::Completed),
        };
        for entry in entries {
            columns.column_mut(entry.task().status()).entries.push(entry);
        }
        columns
    }

    /// Returns the column holding `status`.
    #[must_use]
    pub const fn column(&self, status: TaskStatus) -> &BoardColumn {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Completed => &self.completed,
        }
    }

    const fn column_mut(&mut self, status: TaskStatus) -> &mut BoardColumn {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Completed => &mut self.completed,
        }
    }

    /// Iterates the columns left to right.
    pub fn iter(&self) -> impl Iterator<Item = &BoardColumn> {
        [&self.todo, &self.in_progress, &self.completed].into_iter()
    }
}

/// Summary counts over a whole task collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardStats {
    /// Number of tasks.
    pub total: usize,
    /// Tasks in the to-do column.
    pub todo: usize,
    /// Tasks in the in-progress column.
    pub in_progress: usize,
    /// Tasks in the completed column.
    pub completed: usize,
    /// Completed share as a whole percentage, rounded half up; 0 when empty.
    pub completion_rate: usize,
}

impl BoardStats {
    /// Counts `tasks` by status.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut stats = Self {
            total: tasks.len(),
            ..Self::default()
        };
        for task in tasks {
            match task.status() {
                TaskStatus::Todo => stats.todo += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Completed => stats.completed += 1,
            }
        }
        stats.completion_rate = (stats.completed * 200 + stats.total)
            .checked_div(stats.total * 2)
            .unwrap_or(0);
        stats
    }
}

/// Everything the board renders for one filter and sort selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    columns: BoardColumns,
    stats: BoardStats,
    overdue: HashSet<TaskId>,
}

impl BoardView {
    /// Arranges `tasks` and partitions them into columns.
    ///
    /// Statistics cover every task regardless of `filter`.
    #[must_use]
    pub fn build(tasks: &[Task], filter: PriorityFilter, sort: SortKey, today: NaiveDate) -> Self {
        let overdue = tasks
            .iter()
            .filter(|task| task.is_overdue(today))
            .map(Task::id)
            .collect();
        Self {
            columns: BoardColumns::partition(arrange(tasks, filter, sort)),
            stats: BoardStats::from_tasks(tasks),
            overdue,
        }
    }

    /// Returns the columns.
    #[must_use]
    pub const fn columns(&self) -> &BoardColumns {
        &self.columns
    }

    /// Returns the statistics.
    #[must_use]
    pub const fn stats(&self) -> BoardStats {
        self.stats
    }

    /// Returns whether the entry's task is past due and still open.
    #[must_use]
    pub fn is_overdue(&self, entry: &BoardEntry) -> bool {
        self.overdue.contains(&entry.task().id())
    }
}
