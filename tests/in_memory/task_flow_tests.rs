//! In-memory integration tests for task lifecycle flows.

use super::helpers::{Deck, deck, ensure_cached_status};
use rstest::rstest;
use taskdeck::task::domain::{Task, TaskDraft, TaskPriority, TaskStatus};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn refresh_mirrors_the_source_in_order(deck: Deck) -> eyre::Result<()> {
    let first = deck
        .tasks
        .create(TaskDraft::new("Collect requirements")?)
        .await?;
    let second = deck
        .tasks
        .create(TaskDraft::new("Sketch the data model")?)
        .await?;

    // A fresh replace from the source reproduces the remote ordering.
    deck.task_store.replace_all(Vec::new());
    deck.task_store.refresh().await?;

    let titles: Vec<String> = deck
        .task_store
        .tasks()
        .iter()
        .map(|task| task.title().to_owned())
        .collect();
    eyre::ensure!(
        titles == vec!["Collect requirements".to_owned(), "Sketch the data model".to_owned()],
        "unexpected cache order: {titles:?}",
    );
    eyre::ensure!(!deck.task_store.loading(), "loading flag should be clear");
    ensure_cached_status(&deck.task_store, first.id(), TaskStatus::Todo)?;
    ensure_cached_status(&deck.task_store, second.id(), TaskStatus::Todo)?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_carry_the_session_owner(deck: Deck) -> eyre::Result<()> {
    let created = deck
        .tasks
        .create(
            TaskDraft::new("Owned work")?
                .with_priority(TaskPriority::High)
                .with_assignee("jules"),
        )
        .await?;

    eyre::ensure!(created.owner() == Some(deck.user), "owner not stamped");
    let stored = deck
        .task_source
        .records()
        .into_iter()
        .find(|task| task.id() == created.id())
        .ok_or_else(|| eyre::eyre!("task missing from source"))?;
    eyre::ensure!(stored == created, "source and cache disagree");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn relocation_converges_with_the_source_after_refresh(deck: Deck) -> eyre::Result<()> {
    let created = deck.tasks.create(TaskDraft::new("Drifting work")?).await?;

    let write = deck
        .task_store
        .relocate(created.id(), TaskStatus::InProgress)
        .ok_or_else(|| eyre::eyre!("relocate found no cached task"))?;
    ensure_cached_status(&deck.task_store, created.id(), TaskStatus::InProgress)?;
    write.await?;

    deck.task_store.refresh().await?;
    ensure_cached_status(&deck.task_store, created.id(), TaskStatus::InProgress)?;

    let refreshed = deck
        .task_store
        .find(created.id())
        .ok_or_else(|| eyre::eyre!("task missing after refresh"))?;
    eyre::ensure!(
        refreshed.updated_at() >= created.updated_at(),
        "source should bump updated_at on relocation",
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mark_done_is_visible_in_source_and_cache(deck: Deck) -> eyre::Result<()> {
    let created = deck.tasks.create(TaskDraft::new("Wrap up")?).await?;

    deck.tasks.mark_done(created.id()).await?;

    ensure_cached_status(&deck.task_store, created.id(), TaskStatus::Done)?;
    let stored = deck
        .task_source
        .records()
        .into_iter()
        .find(|task| task.id() == created.id())
        .ok_or_else(|| eyre::eyre!("task missing from source"))?;
    eyre::ensure!(stored.status() == TaskStatus::Done, "source not updated");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_record_everywhere(deck: Deck) -> eyre::Result<()> {
    let keep = deck.tasks.create(TaskDraft::new("Keep")?).await?;
    let gone = deck.tasks.create(TaskDraft::new("Gone")?).await?;

    deck.tasks.delete(gone.id()).await?;

    eyre::ensure!(
        deck.task_store.find(gone.id()).is_none(),
        "cache entry not removed",
    );
    let remaining: Vec<Task> = deck.task_source.records();
    eyre::ensure!(remaining.len() == 1, "source entry not removed");
    ensure_cached_status(&deck.task_store, keep.id(), TaskStatus::Todo)?;
    Ok(())
}
