//! Domain model for the task board.
//!
//! Tasks are plain records with three-valued status and priority fields.
//! Validation happens when drafts are built, so stores and gateways only
//! ever see well-formed values.

mod error;
mod form;
mod ids;
mod query;
mod status;
mod task;

pub use error::{
    ParsePriorityError, ParseQueryError, ParseTaskStatusError, TaskDomainError, ValidationErrors,
};
pub use form::TaskForm;
pub use ids::{TaskId, TaskTitle};
pub use query::{PriorityFilter, SortKey, TaskQuery};
pub use status::{Priority, TaskStatus};
pub use task::{NewTask, PersistedTaskData, Task, TaskDraft, parse_due_date};
