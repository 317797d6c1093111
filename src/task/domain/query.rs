//! Filtering, searching, and sorting over task cache snapshots.
//!
//! Queries are pure: they take a snapshot slice and return a new ordering
//! without touching the store. The view layer re-runs the query whenever
//! its inputs change.

use super::{Task, TaskStatus};
use std::cmp::Ordering;

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskSort {
    /// Newest created first.
    #[default]
    CreatedDesc,
    /// Oldest created first.
    CreatedAsc,
    /// Soonest due first; tasks without a due date sort last.
    DueAsc,
    /// Latest due first; tasks without a due date sort last.
    DueDesc,
}

/// Filter and sort criteria for a task list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    status: Option<TaskStatus>,
    search: Option<String>,
    sort: TaskSort,
}

impl TaskQuery {
    /// Creates a query matching every task, sorted newest-created first.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to a single status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts results to titles containing `needle`, case-insensitively.
    ///
    /// Leading and trailing whitespace in the needle is ignored; an
    /// all-whitespace needle matches everything.
    #[must_use]
    pub fn with_search(mut self, needle: impl Into<String>) -> Self {
        self.search = Some(needle.into());
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub const fn with_sort(mut self, sort: TaskSort) -> Self {
        self.sort = sort;
        self
    }

    /// Applies the query to a snapshot, returning the matching tasks in
    /// sorted order. The snapshot itself is left untouched.
    #[must_use]
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        let needle = self
            .search
            .as_deref()
            .map(|raw| raw.trim().to_lowercase())
            .filter(|trimmed| !trimmed.is_empty());

        let mut matched: Vec<Task> = tasks
            .iter()
            .filter(|task| self.status.is_none_or(|status| task.status() == status))
            .filter(|task| {
                needle
                    .as_deref()
                    .is_none_or(|needle| task.title().to_lowercase().contains(needle))
            })
            .cloned()
            .collect();

        matched.sort_by(|a, b| compare(self.sort, a, b));
        matched
    }
}

fn compare(sort: TaskSort, a: &Task, b: &Task) -> Ordering {
    match sort {
        TaskSort::CreatedDesc => b.created_at().cmp(&a.created_at()),
        TaskSort::CreatedAsc => a.created_at().cmp(&b.created_at()),
        TaskSort::DueAsc => compare_due(a, b, Ordering::Less),
        TaskSort::DueDesc => compare_due(a, b, Ordering::Greater),
    }
}

/// Compares due dates with missing dates ordered last; `earlier_first`
/// selects which present-date ordering wins.
fn compare_due(a: &Task, b: &Task, earlier_first: Ordering) -> Ordering {
    match (a.due_date(), b.due_date()) {
        (Some(a_due), Some(b_due)) => {
            if earlier_first == Ordering::Less {
                a_due.cmp(&b_due)
            } else {
                b_due.cmp(&a_due)
            }
        }
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
