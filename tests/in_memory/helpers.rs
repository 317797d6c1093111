//! Shared test helpers for in-memory integration tests.

use eyre::ensure;
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;
use taskdeck::auth::{FixedAuthContext, UserId};
use taskdeck::board::BoardController;
use taskdeck::project::{
    adapters::memory::InMemoryProjectRecords,
    services::{ProjectLifecycleService, ProjectStore},
};
use taskdeck::task::{
    adapters::memory::InMemoryTaskRecords,
    domain::{TaskId, TaskStatus},
    services::{TaskLifecycleService, TaskStore},
};

/// A fully wired in-memory application core.
pub struct Deck {
    /// Remote task source backing the store.
    pub task_source: InMemoryTaskRecords,
    /// Shared task cache.
    pub task_store: Arc<TaskStore<InMemoryTaskRecords>>,
    /// Task lifecycle flows.
    pub tasks: TaskLifecycleService<InMemoryTaskRecords, FixedAuthContext, DefaultClock>,
    /// Board controller over the task cache.
    pub board: BoardController<InMemoryTaskRecords>,
    /// Remote project source backing the store.
    pub project_source: InMemoryProjectRecords,
    /// Shared project cache.
    pub project_store: Arc<ProjectStore<InMemoryProjectRecords>>,
    /// Project lifecycle flows.
    pub projects: ProjectLifecycleService<InMemoryProjectRecords, FixedAuthContext, DefaultClock>,
    /// The signed-in user stamped on inserts.
    pub user: UserId,
}

/// Builds a deck with in-memory sources and a signed-in user.
#[fixture]
pub fn deck() -> Deck {
    let user = UserId::new();
    let auth = Arc::new(FixedAuthContext::signed_in(user));
    let clock = Arc::new(DefaultClock);

    let task_source = InMemoryTaskRecords::new();
    let task_store = Arc::new(TaskStore::new(Arc::new(task_source.clone())));
    let tasks = TaskLifecycleService::new(Arc::clone(&task_store), Arc::clone(&auth), Arc::clone(&clock));
    let board = BoardController::new(Arc::clone(&task_store));

    let project_source = InMemoryProjectRecords::new();
    let project_store = Arc::new(ProjectStore::new(Arc::new(project_source.clone())));
    let projects =
        ProjectLifecycleService::new(Arc::clone(&project_store), Arc::clone(&auth), clock);

    Deck {
        task_source,
        task_store,
        tasks,
        board,
        project_source,
        project_store,
        projects,
        user,
    }
}

/// Asserts the cached task has the expected status.
///
/// # Errors
///
/// Returns an error when the task is not cached or its status differs.
pub fn ensure_cached_status(
    store: &TaskStore<InMemoryTaskRecords>,
    id: TaskId,
    expected: TaskStatus,
) -> eyre::Result<()> {
    let task = store
        .find(id)
        .ok_or_else(|| eyre::eyre!("task {id} not cached"))?;
    ensure!(
        task.status() == expected,
        "expected {:?}, found {:?}",
        expected,
        task.status()
    );
    Ok(())
}
