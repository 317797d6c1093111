//! In-memory integration tests for project lifecycle and task assignment.

use super::helpers::{Deck, deck};
use rstest::rstest;
use taskdeck::project::domain::ProjectDraft;
use taskdeck::task::{domain::TaskDraft, ports::TaskRecords};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_projects_carry_the_session_owner(deck: Deck) -> eyre::Result<()> {
    let created = deck
        .projects
        .create(ProjectDraft::new("Data platform", "#112233")?.with_description("Warehouse work"))
        .await?;

    eyre::ensure!(created.owner() == Some(deck.user), "owner not stamped");
    eyre::ensure!(
        deck.project_store.find(created.id()).is_some(),
        "project not cached",
    );
    eyre::ensure!(
        deck.project_source.records() == vec![created],
        "project not stored",
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_filter_by_project_assignment(deck: Deck) -> eyre::Result<()> {
    let project = deck
        .projects
        .create(ProjectDraft::new("Mobile app", "#445566")?)
        .await?;

    let assigned_one = deck
        .tasks
        .create(TaskDraft::new("Design onboarding")?.with_project(project.id()))
        .await?;
    let assigned_two = deck
        .tasks
        .create(TaskDraft::new("Build onboarding")?.with_project(project.id()))
        .await?;
    deck.tasks.create(TaskDraft::new("Unrelated chore")?).await?;

    let assigned = deck.task_source.fetch_by_project(project.id()).await?;
    let ids: Vec<_> = assigned.iter().map(|task| task.id()).collect();
    eyre::ensure!(
        ids == vec![assigned_one.id(), assigned_two.id()],
        "unexpected project membership: {ids:?}",
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_project_leaves_cached_tasks_dangling_until_refresh(
    deck: Deck,
) -> eyre::Result<()> {
    let project = deck
        .projects
        .create(ProjectDraft::new("Doomed", "#778899")?)
        .await?;
    let task = deck
        .tasks
        .create(TaskDraft::new("Orphan to be")?.with_project(project.id()))
        .await?;

    deck.projects.delete(project.id()).await?;

    eyre::ensure!(
        deck.project_store.find(project.id()).is_none(),
        "project still cached",
    );
    let cached = deck
        .task_store
        .find(task.id())
        .ok_or_else(|| eyre::eyre!("task missing"))?;
    eyre::ensure!(
        cached.project_id() == Some(project.id()),
        "task mirror should keep the dangling reference until refresh",
    );
    Ok(())
}
