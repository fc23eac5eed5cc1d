//! Status changes requested by drag-and-drop gestures.

use crate::task::domain::{TaskId, TaskStatus};

/// A position on the board: a column and a slot within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropLocation {
    /// Column the position belongs to.
    pub column: TaskStatus,
    /// Slot within the column.
    pub index: usize,
}

impl DropLocation {
    /// Creates a location.
    #[must_use]
    pub const fn new(column: TaskStatus, index: usize) -> Self {
        Self { column, index }
    }
}

/// The result of a finished drag gesture, as reported by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOutcome {
    /// Task that was dragged.
    pub task_id: TaskId,
    /// Where the drag started.
    pub source: DropLocation,
    /// Where the task was dropped; `None` when the gesture was cancelled.
    pub destination: Option<DropLocation>,
}

/// A status update to send to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    /// Task to move.
    pub task_id: TaskId,
    /// Column to move it to.
    pub status: TaskStatus,
}

/// Decides which status update, if any, a drag gesture asks for.
///
/// Cancelled gestures and drops into the source column yield nothing:
/// columns have no manual ordering, so the drop index is ignored.
#[must_use]
pub fn plan_move(outcome: &DragOutcome) -> Option<StatusChange> {
    let destination = outcome.destination?;
    (destination.column != outcome.source.column).then_some(StatusChange {
        task_id: outcome.task_id,
        status: destination.column,
    })
}
