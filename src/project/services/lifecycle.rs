//! Service layer for project creation and deletion flows.

use super::ProjectStore;
use crate::auth::{AuthContext, AuthError};
use crate::project::{
    domain::{Project, ProjectDraft, ProjectId},
    ports::ProjectRecords,
};
use crate::records::RecordSourceError;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for project lifecycle operations.
#[derive(Debug, Error)]
pub enum ProjectLifecycleError {
    /// The current user could not be resolved.
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// The remote record source rejected the call.
    #[error(transparent)]
    Records(#[from] RecordSourceError),
}

/// Result type for project lifecycle service operations.
pub type ProjectLifecycleResult<T> = Result<T, ProjectLifecycleError>;

/// Project lifecycle orchestration service.
#[derive(Clone)]
pub struct ProjectLifecycleService<S, A, C>
where
    S: ProjectRecords,
    A: AuthContext,
    C: Clock + Send + Sync,
{
    store: Arc<ProjectStore<S>>,
    auth: Arc<A>,
    clock: Arc<C>,
}

impl<S, A, C> ProjectLifecycleService<S, A, C>
where
    S: ProjectRecords,
    A: AuthContext,
    C: Clock + Send + Sync,
{
    /// Creates a new project lifecycle service over the shared store.
    #[must_use]
    pub const fn new(store: Arc<ProjectStore<S>>, auth: Arc<A>, clock: Arc<C>) -> Self {
        Self { store, auth, clock }
    }

    /// Creates a project from validated form input.
    ///
    /// Ownership is stamped from the auth context, the record is inserted
    /// remotely, and the new project is appended to the cache once the
    /// insert is confirmed.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError`] when the user lookup or the
    /// remote insert fails; the cache is left untouched in both cases.
    pub async fn create(&self, draft: ProjectDraft) -> ProjectLifecycleResult<Project> {
        let owner = self.auth.current_user().await?;
        let project = Project::new(draft, owner, &*self.clock);
        self.store.records().insert(&project).await?;
        self.store.add(project.clone());
        Ok(project)
    }

    /// Deletes the project matching `id`.
    ///
    /// The cached entry is removed only once the remote delete is
    /// confirmed. Tasks referencing the project keep their dangling
    /// `project_id` until the task collection is refreshed; the source is
    /// authoritative for referential cleanup.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError::Records`] when the remote delete
    /// fails; the cached entry is kept in that case.
    pub async fn delete(&self, id: ProjectId) -> ProjectLifecycleResult<()> {
        self.store.records().delete(id).await?;
        self.store.remove(id);
        Ok(())
    }
}
