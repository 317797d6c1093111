//! Adapter implementations of the task records port.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryTaskRecords;
pub use postgres::PostgresTaskRecords;
