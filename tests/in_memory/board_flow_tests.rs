//! In-memory integration tests for drag gestures against full column
//! derivation.

use super::helpers::{Deck, deck, ensure_cached_status};
use chrono::{TimeDelta, Utc};
use rstest::rstest;
use taskdeck::board::{DragOutcome, DragState, DropTarget, STALE_DONE_AFTER_DAYS};
use taskdeck::task::{
    domain::{Task, TaskDraft, TaskId, TaskRecordData, TaskStatus},
    ports::TaskRecords,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drag_to_another_column_moves_the_task(mut deck: Deck) -> eyre::Result<()> {
    let planning = deck.tasks.create(TaskDraft::new("Plan")?).await?;
    let building = deck
        .tasks
        .create(TaskDraft::new("Build")?.with_status(TaskStatus::InProgress))
        .await?;

    let now = Utc::now();
    let before = deck.board.columns(now);
    eyre::ensure!(before.todo.len() == 1, "todo column should hold one task");
    eyre::ensure!(
        before.in_progress.len() == 1,
        "in_progress column should hold one task",
    );

    deck.board.drag_start(building.id());
    let outcome = deck.board.drag_end(DropTarget::Column(TaskStatus::Done));
    let DragOutcome::Relocated { write, .. } = outcome else {
        eyre::bail!("expected a relocation");
    };
    write.await?;

    let after = deck.board.columns(Utc::now());
    eyre::ensure!(after.in_progress.is_empty(), "column not vacated");
    eyre::ensure!(
        after.done.recent.len() == 1,
        "done column should hold the moved task",
    );
    ensure_cached_status(&deck.task_store, building.id(), TaskStatus::Done)?;
    ensure_cached_status(&deck.task_store, planning.id(), TaskStatus::Todo)?;

    let totals = deck.board.totals();
    eyre::ensure!(totals.todo == 1 && totals.done == 1, "totals out of step");

    // The source converged too, so a refresh changes nothing.
    deck.task_store.refresh().await?;
    ensure_cached_status(&deck.task_store, building.id(), TaskStatus::Done)?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn abandoned_gesture_leaves_the_board_as_it_was(mut deck: Deck) -> eyre::Result<()> {
    let task = deck.tasks.create(TaskDraft::new("Untouched")?).await?;

    deck.board.drag_start(task.id());
    let outcome = deck.board.drag_end(DropTarget::Outside);

    eyre::ensure!(
        matches!(outcome, DragOutcome::Released),
        "expected a plain release",
    );
    eyre::ensure!(
        deck.board.state() == DragState::Idle,
        "gesture should resolve to idle",
    );
    ensure_cached_status(&deck.task_store, task.id(), TaskStatus::Todo)?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stale_done_records_fold_behind_the_disclosure(deck: Deck) -> eyre::Result<()> {
    let now = Utc::now();
    let fresh = done_task("Fresh finish", now - TimeDelta::hours(6));
    let stale = done_task(
        "Old finish",
        now - TimeDelta::days(STALE_DONE_AFTER_DAYS) - TimeDelta::hours(1),
    );
    deck.task_source.insert(&fresh).await?;
    deck.task_source.insert(&stale).await?;
    deck.task_store.refresh().await?;

    let columns = deck.board.columns(now);
    let recent: Vec<&str> = columns.done.recent.iter().map(Task::title).collect();
    let older: Vec<&str> = columns.done.older.iter().map(Task::title).collect();
    eyre::ensure!(recent == vec!["Fresh finish"], "unexpected recent set: {recent:?}");
    eyre::ensure!(older == vec!["Old finish"], "unexpected older set: {older:?}");
    Ok(())
}

fn done_task(title: &str, updated_at: chrono::DateTime<Utc>) -> Task {
    Task::from_record(TaskRecordData {
        id: TaskId::new(),
        title: title.to_owned(),
        status: TaskStatus::Done,
        priority: taskdeck::task::domain::TaskPriority::Medium,
        project_id: None,
        due_date: None,
        description: None,
        assignee: None,
        owner: None,
        created_at: updated_at,
        updated_at,
    })
}
