//! Board arrangement: the pure logic behind the three-column task board.
//!
//! - [`arrange`] filters, sorts, and flags duplicate titles.
//! - [`BoardColumns`] splits arranged entries into status columns.
//! - [`BoardStats`] summarises the whole collection.
//! - [`BoardView`] combines the three with overdue detection.
//! - [`plan_move`] turns a finished drag gesture into a status change.

mod engine;
mod transition;
mod view;

pub use engine::{BoardEntry, arrange};
pub use transition::{DragOutcome, DropLocation, StatusChange, plan_move};
pub use view::{BoardColumn, BoardColumns, BoardStats, BoardView};

#[cfg(test)]
mod tests;
