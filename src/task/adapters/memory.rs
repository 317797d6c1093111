//! In-memory task records for tests and local tooling.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::sync::{Arc, PoisonError, RwLock};

use crate::project::domain::ProjectId;
use crate::records::RecordSourceResult;
use crate::task::{
    domain::{Task, TaskId, TaskPatch},
    ports::TaskRecords,
};

/// Thread-safe in-memory task record source.
///
/// Records are kept in insertion order. Updates bump `updated_at` from the
/// injected clock, standing in for the real backend's trigger.
pub struct InMemoryTaskRecords<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    tasks: Arc<RwLock<Vec<Task>>>,
    clock: Arc<C>,
}

impl<C> Clone for InMemoryTaskRecords<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl InMemoryTaskRecords<DefaultClock> {
    /// Creates an empty record source on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskRecords<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryTaskRecords<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty record source on the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(Vec::new())),
            clock,
        }
    }

    /// Returns the stored records in insertion order.
    #[must_use]
    pub fn records(&self) -> Vec<Task> {
        self.tasks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl<C> TaskRecords for InMemoryTaskRecords<C>
where
    C: Clock + Send + Sync,
{
    async fn fetch_all(&self) -> RecordSourceResult<Vec<Task>> {
        Ok(self.records())
    }

    async fn fetch_by_project(&self, project_id: ProjectId) -> RecordSourceResult<Vec<Task>> {
        let tasks = self.tasks.read().unwrap_or_else(PoisonError::into_inner);
        Ok(tasks
            .iter()
            .filter(|task| task.project_id() == Some(project_id))
            .cloned()
            .collect())
    }

    async fn insert(&self, task: &Task) -> RecordSourceResult<()> {
        let mut tasks = self.tasks.write().unwrap_or_else(PoisonError::into_inner);
        tasks.push(task.clone());
        Ok(())
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> RecordSourceResult<()> {
        let now = self.clock.utc();
        let mut tasks = self.tasks.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = tasks.iter_mut().find(|task| task.id() == id) {
            task.apply(&patch);
            task.touch_at(now);
        }
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> RecordSourceResult<()> {
        let mut tasks = self.tasks.write().unwrap_or_else(PoisonError::into_inner);
        tasks.retain(|task| task.id() != id);
        Ok(())
    }
}
