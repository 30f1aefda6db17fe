//! Tracker Mentions
//!
//! Resolves the users and teams mentioned in issue notes and checks them
//! against project membership:
//! - Actor references (`user:<id>`, `team:<id>`) resolved to entities
//! - Team mentions expanded to their active members
//! - Validation that mentioned users and teams belong to the note's project

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{Actor, DomainError, MentionContext, MentionedUserIds, NoteAttrs};
pub use infrastructure::directory::{Directory, DirectoryFixture};
pub use infrastructure::mention::{MentionService, MentionServiceDeps};
