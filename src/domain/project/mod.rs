//! Project domain module
//!
//! Projects own the membership and team-association records that mentions
//! are validated against.

mod entity;
mod repository;

pub use entity::{Project, ProjectId, ProjectMember, ProjectTeam};
pub use repository::{ProjectMembershipQuery, ProjectRepository, ProjectTeamQuery};

#[cfg(test)]
pub use repository::{MockProjectMembershipQuery, MockProjectRepository, MockProjectTeamQuery};
