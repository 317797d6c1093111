//! `PostgreSQL` implementation of the task records port.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::project::domain::ProjectId;
use crate::records::{RecordSourceError, RecordSourceResult};
use crate::task::{
    domain::{Task, TaskId, TaskPatch, TaskPriority, TaskRecordData, TaskStatus},
    ports::TaskRecords,
};
use crate::auth::UserId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error as DieselError;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task record source.
#[derive(Debug, Clone)]
pub struct PostgresTaskRecords {
    pool: TaskPgPool,
}

impl PostgresTaskRecords {
    /// Creates a new record source from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> RecordSourceResult<T>
    where
        F: FnOnce(&mut PgConnection) -> RecordSourceResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(RecordSourceError::transport)?;
            f(&mut connection)
        })
        .await
        .map_err(RecordSourceError::transport)?
    }
}

#[async_trait]
impl TaskRecords for PostgresTaskRecords {
    async fn fetch_all(&self) -> RecordSourceResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::created_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(map_diesel_error)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn fetch_by_project(&self, project_id: ProjectId) -> RecordSourceResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::project_id.eq(project_id.into_inner()))
                .order(tasks::created_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(map_diesel_error)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn insert(&self, task: &Task) -> RecordSourceResult<()> {
        let new_row = to_new_row(task);
        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(map_diesel_error)?;
            Ok(())
        })
        .await
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> RecordSourceResult<()> {
        let changeset = to_changeset(&patch);
        self.run_blocking(move |connection| {
            // Zero affected rows is a successful no-op: the record source
            // treats a missing id as an empty state, not an error. The
            // `updated_at` bump happens source-side, like the backing
            // service's trigger.
            diesel::update(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .set((changeset, tasks::updated_at.eq(diesel::dsl::now)))
                .execute(connection)
                .map_err(map_diesel_error)?;
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> RecordSourceResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(map_diesel_error)?;
            Ok(())
        })
        .await
    }
}

/// Maps diesel failures onto the record source error contract.
///
/// Database rejections become remote errors carrying the server message
/// (and the violated constraint as the service code, when named); anything
/// else is a transport failure.
fn map_diesel_error(err: DieselError) -> RecordSourceError {
    match err {
        DieselError::DatabaseError(_, info) => info.constraint_name().map_or_else(
            || RecordSourceError::remote(info.message()),
            |constraint| RecordSourceError::remote_with_code(info.message(), constraint),
        ),
        other => RecordSourceError::transport(other),
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().to_owned(),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        project_id: task.project_id().map(ProjectId::into_inner),
        due_date: task.due_date(),
        description: task.description().map(str::to_owned),
        assignee: task.assignee().map(str::to_owned),
        user_id: task.owner().map(UserId::into_inner),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn to_changeset(patch: &TaskPatch) -> TaskChangeset {
    TaskChangeset {
        title: patch.title().map(str::to_owned),
        status: patch.status().map(|status| status.as_str().to_owned()),
        priority: patch.priority().map(|priority| priority.as_str().to_owned()),
        project_id: patch
            .project_id()
            .map(|change| change.map(ProjectId::into_inner)),
        due_date: patch.due_date(),
        description: patch
            .description()
            .map(|change| change.map(str::to_owned)),
        assignee: patch.assignee().map(|change| change.map(str::to_owned)),
    }
}

fn row_to_task(row: TaskRow) -> RecordSourceResult<Task> {
    let TaskRow {
        id,
        title,
        status: persisted_status,
        priority: persisted_priority,
        project_id,
        due_date,
        description,
        assignee,
        user_id,
        created_at,
        updated_at,
    } = row;

    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(RecordSourceError::transport)?;
    let priority = TaskPriority::try_from(persisted_priority.as_str())
        .map_err(RecordSourceError::transport)?;

    Ok(Task::from_record(TaskRecordData {
        id: TaskId::from_uuid(id),
        title,
        status,
        priority,
        project_id: project_id.map(ProjectId::from_uuid),
        due_date,
        description,
        assignee,
        owner: user_id.map(UserId::from_uuid),
        created_at,
        updated_at,
    }))
}
