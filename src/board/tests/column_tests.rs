//! Tests for column derivation, the stale-done split, and status totals.

use super::fixtures::{task_updated_at, timestamp};
use crate::board::{StatusTotals, is_stale_done, partition};
use crate::task::domain::{Task, TaskStatus};
use chrono::TimeDelta;
use rstest::rstest;

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::title).collect()
}

// Statuses [todo, in_progress, done, done]: each column holds exactly its
// matching tasks, and the done pair splits on the two-day threshold.
#[rstest]
fn partition_groups_by_status_and_splits_done_by_recency() {
    let now = timestamp(2025, 10, 10, 12);
    let tasks = vec![
        task_updated_at("plan", TaskStatus::Todo, timestamp(2025, 10, 10, 9)),
        task_updated_at("build", TaskStatus::InProgress, timestamp(2025, 10, 10, 9)),
        task_updated_at("shipped yesterday", TaskStatus::Done, timestamp(2025, 10, 9, 12)),
        task_updated_at("shipped last week", TaskStatus::Done, timestamp(2025, 10, 3, 12)),
    ];

    let columns = partition(&tasks, now);

    assert_eq!(titles(&columns.todo), vec!["plan"]);
    assert_eq!(titles(&columns.in_progress), vec!["build"]);
    assert_eq!(titles(&columns.done.recent), vec!["shipped yesterday"]);
    assert_eq!(titles(&columns.done.older), vec!["shipped last week"]);
}

#[rstest]
fn partition_of_empty_snapshot_is_empty() {
    let columns = partition(&[], timestamp(2025, 10, 10, 12));

    assert!(columns.todo.is_empty());
    assert!(columns.in_progress.is_empty());
    assert!(columns.done.recent.is_empty());
    assert!(columns.done.older.is_empty());
}

#[rstest]
fn partition_preserves_snapshot_order_within_columns() {
    let now = timestamp(2025, 10, 10, 12);
    let tasks = vec![
        task_updated_at("first", TaskStatus::Todo, now),
        task_updated_at("second", TaskStatus::Todo, now),
        task_updated_at("third", TaskStatus::Todo, now),
    ];

    let columns = partition(&tasks, now);

    assert_eq!(titles(&columns.todo), vec!["first", "second", "third"]);
}

// Exactly two days is still recent; the split fires strictly beyond it.
#[rstest]
fn staleness_threshold_is_strictly_greater_than_two_days() {
    let now = timestamp(2025, 10, 10, 12);
    let exactly_two_days = task_updated_at("on the line", TaskStatus::Done, timestamp(2025, 10, 8, 12));
    let just_over = {
        let updated_at = timestamp(2025, 10, 8, 12) - TimeDelta::seconds(1);
        task_updated_at("over the line", TaskStatus::Done, updated_at)
    };

    assert!(!is_stale_done(&exactly_two_days, now));
    assert!(is_stale_done(&just_over, now));

    let columns = partition(&[exactly_two_days, just_over], now);
    assert_eq!(titles(&columns.done.recent), vec!["on the line"]);
    assert_eq!(titles(&columns.done.older), vec!["over the line"]);
}

// No event fires when a task crosses the threshold; only the caller's
// clock reading moves it.
#[rstest]
fn done_task_crosses_to_older_as_now_advances() {
    let task = task_updated_at("ageing", TaskStatus::Done, timestamp(2025, 10, 8, 12));

    let before = partition(std::slice::from_ref(&task), timestamp(2025, 10, 10, 11));
    let after = partition(std::slice::from_ref(&task), timestamp(2025, 10, 10, 13));

    assert_eq!(before.done.recent.len(), 1);
    assert_eq!(after.done.older.len(), 1);
}

#[rstest]
fn totals_tally_every_status() {
    let now = timestamp(2025, 10, 10, 12);
    let tasks = vec![
        task_updated_at("a", TaskStatus::Todo, now),
        task_updated_at("b", TaskStatus::Todo, now),
        task_updated_at("c", TaskStatus::InProgress, now),
        task_updated_at("d", TaskStatus::Done, now),
    ];

    let totals = StatusTotals::tally(&tasks);

    assert_eq!(totals.todo, 2);
    assert_eq!(totals.in_progress, 1);
    assert_eq!(totals.done, 1);
    assert_eq!(totals.total(), 4);
}

#[rstest]
fn totals_of_empty_snapshot_are_zero() {
    assert_eq!(StatusTotals::tally(&[]), StatusTotals::default());
}

#[rstest]
fn column_headings_follow_board_order() {
    let headings: Vec<&str> = TaskStatus::ALL.iter().map(|status| status.label()).collect();
    assert_eq!(headings, vec!["To Do", "In Progress", "Done"]);
}
