//! `PostgreSQL` adapters for project record persistence.

mod models;
mod records;
mod schema;

pub use records::{PostgresProjectRecords, ProjectPgPool};
