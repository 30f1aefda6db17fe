//! Actor references and their resolved forms

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::id::{TeamId, UserId};
use crate::domain::team::Team;
use crate::domain::user::User;

/// Errors produced when parsing an actor identifier
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ActorParseError {
    #[error("Actor identifier cannot be empty")]
    Empty,

    #[error("Unknown actor type '{0}', expected 'user' or 'team'")]
    UnknownType(String),

    #[error("Invalid actor id '{0}'")]
    InvalidId(String),
}

/// Unresolved reference to a user or a team
///
/// The textual form is `user:<id>` or `team:<id>`. A bare number is read as
/// a user ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Actor {
    User(UserId),
    Team(TeamId),
}

impl FromStr for Actor {
    type Err = ActorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() {
            return Err(ActorParseError::Empty);
        }

        let (kind, raw_id) = match s.split_once(':') {
            Some((kind, raw_id)) => (kind, raw_id),
            None => (UserId::PREFIX, s),
        };

        let id: u64 = raw_id
            .parse()
            .map_err(|_| ActorParseError::InvalidId(raw_id.to_string()))?;

        match kind {
            UserId::PREFIX => Ok(Self::User(UserId::new(id))),
            TeamId::PREFIX => Ok(Self::Team(TeamId::new(id))),
            other => Err(ActorParseError::UnknownType(other.to_string())),
        }
    }
}

impl TryFrom<String> for Actor {
    type Error = ActorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Actor> for String {
    fn from(actor: Actor) -> Self {
        actor.to_string()
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User(id) => write!(f, "{}", id),
            Self::Team(id) => write!(f, "{}", id),
        }
    }
}

impl From<UserId> for Actor {
    fn from(id: UserId) -> Self {
        Self::User(id)
    }
}

impl From<TeamId> for Actor {
    fn from(id: TeamId) -> Self {
        Self::Team(id)
    }
}

/// An actor resolved to the entity it references
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedActor {
    User(User),
    Team(Team),
}
