//! Domain model for task records.
//!
//! The task domain models the cached shape of remotely owned task records:
//! validated form input, unvalidated partial patches, and pure query logic,
//! while keeping all infrastructure concerns outside of the domain
//! boundary.

mod error;
mod ids;
mod query;
mod task;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use query::{TaskQuery, TaskSort};
pub use task::{Task, TaskDraft, TaskPatch, TaskPriority, TaskRecordData, TaskStatus};
