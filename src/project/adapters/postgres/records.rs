//! `PostgreSQL` implementation of the project records port.

use super::{
    models::{NewProjectRow, ProjectRow},
    schema::projects,
};
use crate::auth::UserId;
use crate::project::{
    domain::{Project, ProjectColor, ProjectId, ProjectName, ProjectRecordData},
    ports::ProjectRecords,
};
use crate::records::{RecordSourceError, RecordSourceResult};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error as DieselError;

/// `PostgreSQL` connection pool type used by project adapters.
pub type ProjectPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed project record source.
#[derive(Debug, Clone)]
pub struct PostgresProjectRecords {
    pool: ProjectPgPool,
}

impl PostgresProjectRecords {
    /// Creates a new record source from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ProjectPgPool) -> Self {
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
impl ProjectRecords for PostgresProjectRecords {
    async fn fetch_all(&self) -> RecordSourceResult<Vec<Project>> {
        self.run_blocking(|connection| {
            let rows = projects::table
                .order(projects::created_at.asc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(map_diesel_error)?;
            rows.into_iter().map(row_to_project).collect()
        })
        .await
    }

    async fn fetch(&self, id: ProjectId) -> RecordSourceResult<Option<Project>> {
        self.run_blocking(move |connection| {
            let row = projects::table
                .filter(projects::id.eq(id.into_inner()))
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(map_diesel_error)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn insert(&self, project: &Project) -> RecordSourceResult<()> {
        let new_row = to_new_row(project);
        self.run_blocking(move |connection| {
            diesel::insert_into(projects::table)
                .values(&new_row)
                .execute(connection)
                .map_err(map_diesel_error)?;
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: ProjectId) -> RecordSourceResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(projects::table.filter(projects::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(map_diesel_error)?;
            Ok(())
        })
        .await
    }
}

fn map_diesel_error(err: DieselError) -> RecordSourceError {
    match err {
        DieselError::DatabaseError(_, info) => info.constraint_name().map_or_else(
            || RecordSourceError::remote(info.message()),
            |constraint| RecordSourceError::remote_with_code(info.message(), constraint),
        ),
        other => RecordSourceError::transport(other),
    }
}

fn to_new_row(project: &Project) -> NewProjectRow {
    NewProjectRow {
        id: project.id().into_inner(),
        name: project.name().as_str().to_owned(),
        description: project.description().map(str::to_owned),
        color: project.color().as_str().to_owned(),
        user_id: project.owner().map(UserId::into_inner),
        created_at: project.created_at(),
    }
}

fn row_to_project(row: ProjectRow) -> RecordSourceResult<Project> {
    let ProjectRow {
        id,
        name: persisted_name,
        description,
        color: persisted_color,
        user_id,
        created_at,
    } = row;

    let name = ProjectName::new(persisted_name).map_err(RecordSourceError::transport)?;
    let color = ProjectColor::new(persisted_color).map_err(RecordSourceError::transport)?;

    Ok(Project::from_record(ProjectRecordData {
        id: ProjectId::from_uuid(id),
        name,
        description,
        color,
        owner: user_id.map(UserId::from_uuid),
        created_at,
    }))
}
