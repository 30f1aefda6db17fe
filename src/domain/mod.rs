//! Domain layer - Core entities, identifiers and query traits

pub mod actor;
pub mod error;
pub mod id;
pub mod mention;
pub mod note;
pub mod project;
pub mod storage;
pub mod team;
pub mod user;

pub use actor::{Actor, ActorParseError, ResolvedActor};
pub use error::DomainError;
pub use id::{GroupId, OrganizationId, ProjectId, TeamId, UserId};
pub use mention::{MentionValidationError, MentionedUserIds};
pub use note::{Group, MentionContext, NoteAttrs};
pub use project::{
    Project, ProjectMember, ProjectMembershipQuery, ProjectRepository, ProjectTeam,
    ProjectTeamQuery,
};
pub use storage::{Storage, StorageEntity, StorageKey};
pub use team::{Team, TeamMember, TeamMembershipQuery, TeamRepository, TeamStatus};
pub use user::{User, UserRepository, UserStatus};
