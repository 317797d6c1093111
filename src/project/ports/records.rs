//! Records port for the remote project source.

use crate::project::domain::{Project, ProjectId};
use crate::records::RecordSourceResult;
use async_trait::async_trait;

/// Remote project record contract.
///
/// As with tasks, the remote source is authoritative and deleting an
/// identifier with no matching record is a successful no-op.
#[async_trait]
pub trait ProjectRecords: Send + Sync {
    /// Fetches every project record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::records::RecordSourceError`] when the remote call
    /// fails.
    async fn fetch_all(&self) -> RecordSourceResult<Vec<Project>>;

    /// Fetches the project matching `id`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`crate::records::RecordSourceError`] when the remote call
    /// fails.
    async fn fetch(&self, id: ProjectId) -> RecordSourceResult<Option<Project>>;

    /// Inserts a new project record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::records::RecordSourceError`] when the remote call
    /// fails.
    async fn insert(&self, project: &Project) -> RecordSourceResult<()>;

    /// Deletes the record matching `id`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::records::RecordSourceError`] when the remote call
    /// fails.
    async fn delete(&self, id: ProjectId) -> RecordSourceResult<()>;
}
