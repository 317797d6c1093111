//! Adapter implementations of the project records port.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryProjectRecords;
pub use postgres::PostgresProjectRecords;
