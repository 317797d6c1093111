//! Authentication-context port.
//!
//! The record source handles sign-in and session management itself; the
//! core only needs the current user's identifier to stamp ownership on
//! inserted records. Nothing here depends on how that identity is
//! established.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random user identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a user identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result type for authentication-context lookups.
pub type AuthResult<T> = Result<T, AuthError>;

/// Errors returned while resolving the current user.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The session backend could not be reached.
    #[error("auth context unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuthError {
    /// Wraps a session-backend failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}

/// Contract for resolving the currently signed-in user.
#[async_trait]
pub trait AuthContext: Send + Sync {
    /// Returns the current user's identifier, or `None` when no session is
    /// active.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Unavailable`] when the session backend cannot
    /// be reached.
    async fn current_user(&self) -> AuthResult<Option<UserId>>;
}

/// Auth context that always reports the same signed-in user.
///
/// Used by tests and local tooling where a real session backend is absent.
#[derive(Debug, Clone, Default)]
pub struct FixedAuthContext {
    user: Option<UserId>,
}

impl FixedAuthContext {
    /// Creates a context with the given signed-in user.
    #[must_use]
    pub const fn signed_in(user: UserId) -> Self {
        Self { user: Some(user) }
    }

    /// Creates a context with no active session.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl AuthContext for FixedAuthContext {
    async fn current_user(&self) -> AuthResult<Option<UserId>> {
        Ok(self.user)
    }
}
