//! Process-wide project cache mirroring the remote record source.

use crate::project::{
    domain::{Project, ProjectId},
    ports::ProjectRecords,
};
use crate::records::RecordSourceResult;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Order-preserving cache of the project collection.
///
/// Projects are read-mostly: the cache is replaced wholesale after a
/// fetch, and individual entries change only through the lifecycle
/// service. There is no loading flag and no optimistic write path.
pub struct ProjectStore<S>
where
    S: ProjectRecords,
{
    records: Arc<S>,
    cache: RwLock<Vec<Project>>,
}

impl<S> ProjectStore<S>
where
    S: ProjectRecords,
{
    /// Creates an empty store over the given record source.
    #[must_use]
    pub fn new(records: Arc<S>) -> Self {
        Self {
            records,
            cache: RwLock::new(Vec::new()),
        }
    }

    /// Returns a handle to the underlying record source.
    #[must_use]
    pub fn records(&self) -> Arc<S> {
        Arc::clone(&self.records)
    }

    /// Returns a snapshot of the cached projects in cache order.
    #[must_use]
    pub fn projects(&self) -> Vec<Project> {
        self.read_cache().clone()
    }

    /// Returns the cached project matching `id`, if present.
    #[must_use]
    pub fn find(&self, id: ProjectId) -> Option<Project> {
        self.read_cache()
            .iter()
            .find(|project| project.id() == id)
            .cloned()
    }

    /// Overwrites the full cache, preserving the input order.
    pub fn replace_all(&self, projects: Vec<Project>) {
        *self.write_cache() = projects;
    }

    /// Appends a project to the cache.
    pub fn add(&self, project: Project) {
        self.write_cache().push(project);
    }

    /// Drops the cached project matching `id`; a missing id is a silent
    /// no-op.
    pub fn remove(&self, id: ProjectId) {
        self.write_cache().retain(|project| project.id() != id);
    }

    /// Replaces the cache with a full fetch from the record source.
    ///
    /// # Errors
    ///
    /// Returns [`crate::records::RecordSourceError`] when the fetch fails;
    /// the cache is left intact.
    pub async fn refresh(&self) -> RecordSourceResult<()> {
        let projects = self.records.fetch_all().await?;
        self.replace_all(projects);
        Ok(())
    }

    fn read_cache(&self) -> RwLockReadGuard<'_, Vec<Project>> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, Vec<Project>> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }
}
