//! Port contracts for project records.

pub mod records;

pub use records::ProjectRecords;
