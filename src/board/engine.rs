//! Filtering, ordering, and duplicate annotation of a task list.

use crate::task::domain::{PriorityFilter, SortKey, Task};
use std::collections::HashMap;

/// One task as it appears on the board, with its per-pass annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEntry {
    task: Task,
    is_duplicate: bool,
}

impl BoardEntry {
    /// Returns the underlying task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns whether another entry in the same pass shares this title.
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        self.is_duplicate
    }

    /// Consumes the entry, returning the task.
    #[must_use]
    pub fn into_task(self) -> Task {
        self.task
    }
}

/// Produces the ordered, annotated list the board renders.
///
/// Tasks failing `filter` are dropped, the rest are stably sorted by `sort`,
/// and every task whose normalised title occurs at least twice among the
/// kept tasks is flagged as a duplicate. The input is never modified and
/// every entry owns a fresh copy of its task, so flags never carry over
/// from an earlier pass.
#[must_use]
pub fn arrange(tasks: &[Task], filter: PriorityFilter, sort: SortKey) -> Vec<BoardEntry> {
    let mut kept: Vec<&Task> = tasks
        .iter()
        .filter(|task| filter.admits(task.priority()))
        .collect();
    kept.sort_by(|left, right| sort.compare(left, right));

    let mut title_counts: HashMap<String, usize> = HashMap::new();
    for task in &kept {
        *title_counts.entry(task.title().duplicate_key()).or_default() += 1;
    }

    kept.into_iter()
        .map(|task| BoardEntry {
            is_duplicate: title_counts
                .get(&task.title().duplicate_key())
                .is_some_and(|count| *count > 1),
            task: task.clone(),
        })
        .collect()
}
