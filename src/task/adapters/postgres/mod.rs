//! `PostgreSQL` adapters for task record persistence.

mod models;
mod records;
mod schema;

pub use records::{PostgresTaskRecords, TaskPgPool};
