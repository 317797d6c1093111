//! Domain model for project records.
//!
//! Projects are named groupings that own zero or more tasks. The domain
//! validates form input (name, accent colour) and keeps all infrastructure
//! concerns outside of the domain boundary.

mod error;
mod ids;
mod project;

pub use error::ProjectDomainError;
pub use ids::ProjectId;
pub use project::{Project, ProjectColor, ProjectDraft, ProjectName, ProjectRecordData};
