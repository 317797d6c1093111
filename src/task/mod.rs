//! Task records: domain model, remote port, cache store, and lifecycle
//! flows.
//!
//! The remote source owns the records; [`services::TaskStore`] is the
//! process-wide mirror the board and list views read from. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Cache store and orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
