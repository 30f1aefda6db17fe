//! Mention domain module
//!
//! Partitioning of actor references and the result and error types of
//! mention extraction and validation.

mod entity;
mod error;

pub use entity::{
    separate_actors, separate_resolved_actors, MentionedUserIds, SeparatedActors,
    SeparatedResolvedActors,
};
pub use error::MentionValidationError;
