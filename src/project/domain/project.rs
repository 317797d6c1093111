//! Project aggregate root and validated scalar types.

use super::{ProjectDomainError, ProjectId};
use crate::auth::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated project accent colour in `#RGB` or `#RRGGBB` hex notation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectColor(String);

impl ProjectColor {
    /// Creates a validated colour value.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidProjectColor`] when the value is
    /// not a `#` followed by exactly three or six hexadecimal digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ProjectDomainError> {
        let raw = value.into();
        let mut chars = raw.chars();
        let leading_hash = chars.next() == Some('#');
        let digits: Vec<char> = chars.collect();
        let is_valid = leading_hash
            && matches!(digits.len(), 3 | 6)
            && digits.iter().all(char::is_ascii_hexdigit);

        if !is_valid {
            return Err(ProjectDomainError::InvalidProjectColor(raw));
        }

        Ok(Self(raw))
    }

    /// Returns the colour as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectColor {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProjectColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty project name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Creates a validated project name.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyProjectName`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ProjectDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProjectDomainError::EmptyProjectName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Project aggregate root.
///
/// Projects are externally owned records; this type is the cached local
/// shape. A project groups zero or more tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
    description: Option<String>,
    color: ProjectColor,
    owner: Option<UserId>,
    created_at: DateTime<Utc>,
}

/// Validated input for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    name: ProjectName,
    description: Option<String>,
    color: ProjectColor,
}

impl ProjectDraft {
    /// Creates a draft from raw form input.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError`] when the name is empty or the colour
    /// is malformed.
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<Self, ProjectDomainError> {
        Ok(Self {
            name: ProjectName::new(name)?,
            description: None,
            color: ProjectColor::new(color)?,
        })
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Parameter object for reconstructing a persisted project record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecordData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted project name.
    pub name: ProjectName,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted accent colour.
    pub color: ProjectColor,
    /// Persisted owner, if the record was created by a signed-in user.
    pub owner: Option<UserId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project from a validated draft.
    #[must_use]
    pub fn new(draft: ProjectDraft, owner: Option<UserId>, clock: &impl Clock) -> Self {
        Self {
            id: ProjectId::new(),
            name: draft.name,
            description: draft.description,
            color: draft.color,
            owner,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_record(data: ProjectRecordData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            color: data.color,
            owner: data.owner,
            created_at: data.created_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the project description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the accent colour.
    #[must_use]
    pub const fn color(&self) -> &ProjectColor {
        &self.color
    }

    /// Returns the owner, if the record was created by a signed-in user.
    #[must_use]
    pub const fn owner(&self) -> Option<UserId> {
        self.owner
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
