//! Team domain module
//!
//! Teams group users inside an organization and can be associated with
//! projects. Mentioning a team mentions every member.

mod entity;
mod repository;

pub use entity::{Team, TeamId, TeamMember, TeamStatus};
pub use repository::{TeamMembershipQuery, TeamRepository};

#[cfg(test)]
pub use repository::{MockTeamMembershipQuery, MockTeamRepository};
