//! Error contract shared by remote record sources.
//!
//! Every call against the remote record source completes with either a
//! result payload or an error object carrying a message and an optional
//! service code. Adapters map their native failures into this shape so the
//! stores and services stay agnostic of the backing service.

use std::sync::Arc;
use thiserror::Error;

/// Result type for remote record source operations.
pub type RecordSourceResult<T> = Result<T, RecordSourceError>;

/// Errors returned by remote record source adapters.
#[derive(Debug, Clone, Error)]
pub enum RecordSourceError {
    /// The remote service rejected the call.
    #[error("remote record source error: {message}")]
    Remote {
        /// Human-readable message from the service.
        message: String,
        /// Service-specific error code, when one was provided.
        code: Option<String>,
    },

    /// Transport or infrastructure failure below the service contract.
    #[error("record source transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl RecordSourceError {
    /// Creates a remote-rejection error without a service code.
    #[must_use]
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
            code: None,
        }
    }

    /// Creates a remote-rejection error with a service code.
    #[must_use]
    pub fn remote_with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
            code: Some(code.into()),
        }
    }

    /// Wraps a transport-level failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Returns the service code, when one was provided.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Remote { code, .. } => code.as_deref(),
            Self::Transport(_) => None,
        }
    }
}
