//! Service layer for task creation, completion, and deletion flows.

use super::TaskStore;
use crate::auth::{AuthContext, AuthError};
use crate::records::RecordSourceError;
use crate::task::{
    domain::{Task, TaskDraft, TaskId, TaskPatch, TaskStatus},
    ports::TaskRecords,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task lifecycle operations.
///
/// The rendered message is what the initiating view shows inline; nothing
/// here is fatal and no retry is attempted.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// The current user could not be resolved.
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// The remote record source rejected the call.
    #[error(transparent)]
    Records(#[from] RecordSourceError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Writes go to the remote source first; the local mirror changes only
/// after the remote call, so a failure leaves the cache untouched. The one
/// exception is relocation, which lives on [`TaskStore`] with the inverse,
/// optimistic ordering.
#[derive(Clone)]
pub struct TaskLifecycleService<S, A, C>
where
    S: TaskRecords + 'static,
    A: AuthContext,
    C: Clock + Send + Sync,
{
    store: Arc<TaskStore<S>>,
    auth: Arc<A>,
    clock: Arc<C>,
}

impl<S, A, C> TaskLifecycleService<S, A, C>
where
    S: TaskRecords + 'static,
    A: AuthContext,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service over the shared store.
    #[must_use]
    pub const fn new(store: Arc<TaskStore<S>>, auth: Arc<A>, clock: Arc<C>) -> Self {
        Self { store, auth, clock }
    }

    /// Creates a task from validated form input.
    ///
    /// Ownership is stamped from the auth context, the record is inserted
    /// remotely, and the new task is appended to the cache once the insert
    /// is confirmed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the user lookup or the remote
    /// insert fails; the cache is left untouched in both cases.
    pub async fn create(&self, draft: TaskDraft) -> TaskLifecycleResult<Task> {
        let owner = self.auth.current_user().await?;
        let task = Task::new(draft, owner, &*self.clock);
        self.store.records().insert(&task).await?;
        self.store.add(task.clone());
        Ok(task)
    }

    /// Moves the task matching `id` straight to the done column.
    ///
    /// Unlike drag relocation this write is not optimistic: the remote
    /// update is awaited and the cache patched only on success.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Records`] when the remote update
    /// fails.
    pub async fn mark_done(&self, id: TaskId) -> TaskLifecycleResult<()> {
        let patch = TaskPatch::status_change(TaskStatus::Done);
        self.store.records().update(id, patch.clone()).await?;
        self.store.patch(id, &patch);
        Ok(())
    }

    /// Deletes the task matching `id`.
    ///
    /// The cached entry is removed only once the remote delete is
    /// confirmed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Records`] when the remote delete
    /// fails; the cached entry is kept in that case.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        self.store.records().delete(id).await?;
        self.store.remove(id);
        Ok(())
    }
}
