//! Error types for project domain validation.

use thiserror::Error;

/// Errors returned while constructing domain project values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The colour value is not a `#RGB` or `#RRGGBB` hex string.
    #[error("invalid project colour '{0}', expected #RGB or #RRGGBB")]
    InvalidProjectColor(String),
}
