//! Project records: domain model, remote port, cache store, and lifecycle
//! flows.
//!
//! Projects group tasks and carry presentation metadata (accent colour).
//! The module mirrors the layout of [`crate::task`]:
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
