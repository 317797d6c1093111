//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Board status.
    pub status: String,
    /// Task priority.
    pub priority: String,
    /// Optional owning project.
    pub project_id: Option<uuid::Uuid>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Optional description.
    pub description: Option<String>,
    /// Optional assignee.
    pub assignee: Option<String>,
    /// Optional creating user.
    pub user_id: Option<uuid::Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Board status.
    pub status: String,
    /// Task priority.
    pub priority: String,
    /// Optional owning project.
    pub project_id: Option<uuid::Uuid>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Optional description.
    pub description: Option<String>,
    /// Optional assignee.
    pub assignee: Option<String>,
    /// Optional creating user.
    pub user_id: Option<uuid::Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Update model for task records.
///
/// Single-`Option` fields are skipped when `None`; nested options map a
/// patch's explicit null onto the nullable columns.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// New title, when the patch sets one.
    pub title: Option<String>,
    /// New status, when the patch sets one.
    pub status: Option<String>,
    /// New priority, when the patch sets one.
    pub priority: Option<String>,
    /// Project reassignment, when the patch sets one.
    pub project_id: Option<Option<uuid::Uuid>>,
    /// Due date change, when the patch sets one.
    pub due_date: Option<Option<NaiveDate>>,
    /// Description change, when the patch sets one.
    pub description: Option<Option<String>>,
    /// Assignee change, when the patch sets one.
    pub assignee: Option<Option<String>>,
}
