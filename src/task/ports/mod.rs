//! Port contracts for task records.
//!
//! Ports define infrastructure-agnostic interfaces used by the task store
//! and lifecycle services.

pub mod records;

pub use records::TaskRecords;
