//! Actor domain module
//!
//! An actor is a typed reference to either a user or a team. Mentions carry
//! actors, which are resolved to entities only when needed.

mod entity;

pub use entity::{Actor, ActorParseError, ResolvedActor};
