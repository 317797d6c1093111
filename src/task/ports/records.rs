//! Records port for the remote task source.

use crate::project::domain::ProjectId;
use crate::records::RecordSourceResult;
use crate::task::domain::{Task, TaskId, TaskPatch};
use async_trait::async_trait;

/// Remote task record contract.
///
/// The remote source is authoritative. Updating or deleting an identifier
/// with no matching record is a successful no-op, mirroring the backing
/// service: an empty result is an empty state, not an error.
#[async_trait]
pub trait TaskRecords: Send + Sync {
    /// Fetches every task record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::records::RecordSourceError`] when the remote call
    /// fails.
    async fn fetch_all(&self) -> RecordSourceResult<Vec<Task>>;

    /// Fetches the task records assigned to the given project.
    ///
    /// # Errors
    ///
    /// Returns [`crate::records::RecordSourceError`] when the remote call
    /// fails.
    async fn fetch_by_project(&self, project_id: ProjectId) -> RecordSourceResult<Vec<Task>>;

    /// Inserts a new task record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::records::RecordSourceError`] when the remote call
    /// fails.
    async fn insert(&self, task: &Task) -> RecordSourceResult<()>;

    /// Merges `patch` into the record matching `id`. The source bumps the
    /// record's `updated_at` as part of the write.
    ///
    /// # Errors
    ///
    /// Returns [`crate::records::RecordSourceError`] when the remote call
    /// fails.
    async fn update(&self, id: TaskId, patch: TaskPatch) -> RecordSourceResult<()>;

    /// Deletes the record matching `id`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::records::RecordSourceError`] when the remote call
    /// fails.
    async fn delete(&self, id: TaskId) -> RecordSourceResult<()>;
}
