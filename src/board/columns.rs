//! Column derivation for the three-column board view.

use crate::task::domain::{Task, TaskStatus};
use chrono::{DateTime, TimeDelta, Utc};

/// Days since last update after which a done task is folded away.
pub const STALE_DONE_AFTER_DAYS: i64 = 2;

/// The done column, split by recency of the last update.
///
/// Older entries sit behind a manual disclosure in the view; whether they
/// are shown is the caller's state, not the board's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoneColumn {
    /// Done tasks updated within the staleness window.
    pub recent: Vec<Task>,
    /// Done tasks whose last update is older than the staleness window.
    pub older: Vec<Task>,
}

/// Snapshot of the three fixed board columns.
///
/// Derived from the cache on every call; no column state is persisted
/// anywhere. A task sits in exactly the column matching its status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardColumns {
    /// Tasks with status `todo`.
    pub todo: Vec<Task>,
    /// Tasks with status `in_progress`.
    pub in_progress: Vec<Task>,
    /// Tasks with status `done`, split by recency.
    pub done: DoneColumn,
}

/// Returns whether a done task's last update falls outside the staleness
/// window at `now`.
#[must_use]
pub fn is_stale_done(task: &Task, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(task.updated_at()) > TimeDelta::days(STALE_DONE_AFTER_DAYS)
}

/// Partitions a cache snapshot into board columns.
///
/// Pure in `(tasks, now)`: callers pass the clock reading explicitly, so a
/// done task can silently cross from recent to older between two calls
/// without any event firing. Cache order is preserved within each column.
#[must_use]
pub fn partition(tasks: &[Task], now: DateTime<Utc>) -> BoardColumns {
    let mut columns = BoardColumns::default();
    for task in tasks {
        match task.status() {
            TaskStatus::Todo => columns.todo.push(task.clone()),
            TaskStatus::InProgress => columns.in_progress.push(task.clone()),
            TaskStatus::Done => {
                if is_stale_done(task, now) {
                    columns.done.older.push(task.clone());
                } else {
                    columns.done.recent.push(task.clone());
                }
            }
        }
    }
    columns
}
