//! Directory - in-memory users, teams, projects and memberships
//!
//! Stands in for the host application's data layer. A directory is loaded
//! from a JSON fixture and wired into a [`MentionService`].
//!
//! [`MentionService`]: crate::infrastructure::mention::MentionService

mod fixture;

pub use fixture::{Directory, DirectoryFixture, ProjectRecord, TeamRecord, UserRecord};
