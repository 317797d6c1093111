//! In-memory project records for tests and local tooling.

use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock};

use crate::project::{
    domain::{Project, ProjectId},
    ports::ProjectRecords,
};
use crate::records::RecordSourceResult;

/// Thread-safe in-memory project record source, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRecords {
    projects: Arc<RwLock<Vec<Project>>>,
}

impl InMemoryProjectRecords {
    /// Creates an empty record source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored records in insertion order.
    #[must_use]
    pub fn records(&self) -> Vec<Project> {
        self.projects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ProjectRecords for InMemoryProjectRecords {
    async fn fetch_all(&self) -> RecordSourceResult<Vec<Project>> {
        Ok(self.records())
    }

    async fn fetch(&self, id: ProjectId) -> RecordSourceResult<Option<Project>> {
        let projects = self.projects.read().unwrap_or_else(PoisonError::into_inner);
        Ok(projects.iter().find(|project| project.id() == id).cloned())
    }

    async fn insert(&self, project: &Project) -> RecordSourceResult<()> {
        let mut projects = self.projects.write().unwrap_or_else(PoisonError::into_inner);
        projects.push(project.clone());
        Ok(())
    }

    async fn delete(&self, id: ProjectId) -> RecordSourceResult<()> {
        let mut projects = self.projects.write().unwrap_or_else(PoisonError::into_inner);
        projects.retain(|project| project.id() != id);
        Ok(())
    }
}
