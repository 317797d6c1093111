//! Board view logic: column derivation and the drag-gesture lifecycle.
//!
//! Everything here is derived from task store snapshots. Column membership
//! is a pure function of status, the stale-done split is a pure function
//! of `(tasks, now)`, and the only mutation path is a completed drag
//! gesture resolving into a store relocation.

pub mod columns;
pub mod drag;
pub mod totals;

pub use columns::{BoardColumns, DoneColumn, STALE_DONE_AFTER_DAYS, is_stale_done, partition};
pub use drag::{BoardController, DragOutcome, DragState, DropTarget};
pub use totals::StatusTotals;

#[cfg(test)]
mod tests;
