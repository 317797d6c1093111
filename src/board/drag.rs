//! Drag-gesture lifecycle for the board view.
//!
//! One gesture is active at a time by construction: the controller tracks
//! a single dragged id and every release resolves back to idle before the
//! next gesture can start.

use super::columns::{BoardColumns, partition};
use super::totals::StatusTotals;
use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::TaskRecords,
    services::TaskStore,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// State of the drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A task is being dragged.
    Dragging {
        /// Identifier of the dragged task.
        active: TaskId,
    },
}

/// Where a gesture was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Released outside any column.
    Outside,
    /// Released over the column for the given status.
    Column(TaskStatus),
}

/// Resolution of a completed gesture.
#[derive(Debug)]
pub enum DragOutcome {
    /// No gesture was active when the release arrived.
    Ignored,
    /// The gesture ended without a store mutation: released outside any
    /// column, over the task's current column, or the dragged id was no
    /// longer cached.
    Released,
    /// The dragged task was relocated to a new column.
    Relocated {
        /// Identifier of the relocated task.
        task: TaskId,
        /// Status the task was moved to.
        to: TaskStatus,
        /// Handle resolving when the fire-and-continue remote write
        /// completes.
        write: JoinHandle<()>,
    },
}

/// Board controller: derives column views from the task store and turns
/// drag gestures into store relocations.
pub struct BoardController<S>
where
    S: TaskRecords + 'static,
{
    store: Arc<TaskStore<S>>,
    state: DragState,
}

impl<S> BoardController<S>
where
    S: TaskRecords + 'static,
{
    /// Creates a controller over the shared task store.
    #[must_use]
    pub const fn new(store: Arc<TaskStore<S>>) -> Self {
        Self {
            store,
            state: DragState::Idle,
        }
    }

    /// Returns the current gesture state.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Returns the dragged task's snapshot for proxy rendering, when a
    /// gesture is active and the id is still cached.
    #[must_use]
    pub fn active_task(&self) -> Option<Task> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { active } => self.store.find(active),
        }
    }

    /// Derives the column view from the current cache snapshot at `now`.
    #[must_use]
    pub fn columns(&self, now: DateTime<Utc>) -> BoardColumns {
        partition(&self.store.tasks(), now)
    }

    /// Tallies per-status counts from the current cache snapshot.
    #[must_use]
    pub fn totals(&self) -> StatusTotals {
        StatusTotals::tally(&self.store.tasks())
    }

    /// Begins a gesture, capturing the dragged task's id.
    ///
    /// Starting while another gesture is active replaces the active id; the
    /// superseded gesture resolves to nothing.
    pub const fn drag_start(&mut self, id: TaskId) {
        self.state = DragState::Dragging { active: id };
    }

    /// Resolves a release and returns the gesture to idle unconditionally.
    ///
    /// A release over a column whose status differs from the dragged
    /// task's current status relocates the task through the store; any
    /// other release mutates nothing.
    pub fn drag_end(&mut self, target: DropTarget) -> DragOutcome {
        let state = self.state;
        self.state = DragState::Idle;

        let DragState::Dragging { active } = state else {
            return DragOutcome::Ignored;
        };
        let DropTarget::Column(to) = target else {
            return DragOutcome::Released;
        };
        let Some(task) = self.store.find(active) else {
            return DragOutcome::Released;
        };
        if task.status() == to {
            return DragOutcome::Released;
        }

        self.store
            .relocate(active, to)
            .map_or(DragOutcome::Released, |write| DragOutcome::Relocated {
                task: active,
                to,
                write,
            })
    }
}
