//! Process-wide task cache mirroring the remote record source.

use crate::records::RecordSourceResult;
use crate::task::{
    domain::{Task, TaskId, TaskPatch, TaskStatus},
    ports::TaskRecords,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::task::JoinHandle;

/// Order-preserving cache of the task collection.
///
/// The store is created once at application start and shared by handle;
/// every view reads the same mirror. Reads are synchronous snapshots.
/// Mutations follow the optimistic contract of the source system: the
/// local entry changes first, and the matching remote write may still
/// fail, leaving the mirror ahead of the source until the next
/// [`refresh`](Self::refresh).
///
/// The store performs no request cancellation. A refresh overlapping
/// another refresh, or a relocation still in flight when a refresh lands,
/// resolves by completion order, and the [`loading`](Self::loading) flag
/// can end up inconsistent when refreshes overlap.
pub struct TaskStore<S>
where
    S: TaskRecords + 'static,
{
    records: Arc<S>,
    cache: RwLock<Vec<Task>>,
    loading: AtomicBool,
}

impl<S> TaskStore<S>
where
    S: TaskRecords + 'static,
{
    /// Creates an empty store over the given record source.
    ///
    /// The loading flag starts set and clears when the first refresh
    /// completes.
    #[must_use]
    pub fn new(records: Arc<S>) -> Self {
        Self {
            records,
            cache: RwLock::new(Vec::new()),
            loading: AtomicBool::new(true),
        }
    }

    /// Returns a handle to the underlying record source.
    #[must_use]
    pub fn records(&self) -> Arc<S> {
        Arc::clone(&self.records)
    }

    /// Returns a snapshot of the cached tasks in cache order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.read_cache().clone()
    }

    /// Returns the cached task matching `id`, if present.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<Task> {
        self.read_cache().iter().find(|task| task.id() == id).cloned()
    }

    /// Returns whether a full refresh is in progress.
    ///
    /// UI gating only; the flag carries no correctness guarantee.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Overwrites the full cache, preserving the input order.
    pub fn replace_all(&self, tasks: Vec<Task>) {
        *self.write_cache() = tasks;
    }

    /// Appends a task to the cache.
    ///
    /// Entries are not deduplicated by id; the caller must ensure the task
    /// is new.
    pub fn add(&self, task: Task) {
        self.write_cache().push(task);
    }

    /// Merges `patch` into the cached task matching `id`.
    ///
    /// A missing id is a silent no-op.
    pub fn patch(&self, id: TaskId, patch: &TaskPatch) {
        let mut cache = self.write_cache();
        match cache.iter_mut().find(|task| task.id() == id) {
            Some(task) => task.apply(patch),
            None => tracing::debug!(task = %id, "patch ignored, id not cached"),
        }
    }

    /// Drops the cached task matching `id`.
    ///
    /// A missing id is a silent no-op.
    pub fn remove(&self, id: TaskId) {
        self.write_cache().retain(|task| task.id() != id);
    }

    /// Moves the task matching `id` to `new_status`.
    ///
    /// The cached status is patched synchronously, then the remote write is
    /// dispatched fire-and-continue; the returned handle resolves when the
    /// write completes. A failed write is logged and never rolls the cache
    /// back. Overlapping relocations for one task coalesce last-intent-wins:
    /// completions never write into the cache, so a stale response cannot
    /// clobber a newer local status.
    ///
    /// A missing id performs neither effect and returns `None`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn relocate(&self, id: TaskId, new_status: TaskStatus) -> Option<JoinHandle<()>> {
        {
            let mut cache = self.write_cache();
            let Some(task) = cache.iter_mut().find(|task| task.id() == id) else {
                tracing::debug!(task = %id, "relocate ignored, id not cached");
                return None;
            };
            task.apply(&TaskPatch::status_change(new_status));
        }

        let records = self.records();
        Some(tokio::spawn(async move {
            if let Err(err) = records.update(id, TaskPatch::status_change(new_status)).await {
                tracing::warn!(
                    task = %id,
                    status = new_status.as_str(),
                    error = %err,
                    "relocate write failed, cache left ahead of source",
                );
            }
        }))
    }

    /// Replaces the cache with a full fetch from the record source.
    ///
    /// The loading flag is set for the duration of the call. On failure the
    /// cache is left intact and the error returned.
    ///
    /// # Errors
    ///
    /// Returns [`crate::records::RecordSourceError`] when the fetch fails.
    pub async fn refresh(&self) -> RecordSourceResult<()> {
        self.loading.store(true, Ordering::Release);
        let fetched = self.records.fetch_all().await;
        let outcome = match fetched {
            Ok(tasks) => {
                self.replace_all(tasks);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "task refresh failed, cache left intact");
                Err(err)
            }
        };
        self.loading.store(false, Ordering::Release);
        outcome
    }

    fn read_cache(&self) -> RwLockReadGuard<'_, Vec<Task>> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, Vec<Task>> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }
}
