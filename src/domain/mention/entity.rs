//! Mention partitions and extraction results

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::domain::actor::{Actor, ResolvedActor};
use crate::domain::id::{TeamId, UserId};
use crate::domain::team::Team;
use crate::domain::user::User;

/// Actor references split by type, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeparatedActors {
    pub users: Vec<UserId>,
    pub teams: Vec<TeamId>,
}

impl SeparatedActors {
    pub fn user_ids(&self) -> HashSet<UserId> {
        self.users.iter().copied().collect()
    }

    pub fn team_ids(&self) -> HashSet<TeamId> {
        self.teams.iter().copied().collect()
    }
}

/// Resolved entities split by type, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeparatedResolvedActors {
    pub users: Vec<User>,
    pub teams: Vec<Team>,
}

/// Split unresolved references by type without touching storage
pub fn separate_actors(actors: &[Actor]) -> SeparatedActors {
    let mut separated = SeparatedActors::default();

    for actor in actors {
        match *actor {
            Actor::User(id) => separated.users.push(id),
            Actor::Team(id) => separated.teams.push(id),
        }
    }

    separated
}

/// Split resolved entities by type
pub fn separate_resolved_actors(
    actors: impl IntoIterator<Item = ResolvedActor>,
) -> SeparatedResolvedActors {
    let mut separated = SeparatedResolvedActors::default();

    for actor in actors {
        match actor {
            ResolvedActor::User(user) => separated.users.push(user),
            ResolvedActor::Team(team) => separated.teams.push(team),
        }
    }

    separated
}

/// Users reached by a set of mentions
///
/// `users` holds explicitly mentioned users. `team_users` holds members of
/// mentioned teams that were not mentioned explicitly. The two sets never
/// overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MentionedUserIds {
    users: BTreeSet<UserId>,
    team_users: BTreeSet<UserId>,
}

impl MentionedUserIds {
    /// Build the partition; any ID present in both inputs stays in `users`
    pub fn new(
        users: impl IntoIterator<Item = UserId>,
        team_users: impl IntoIterator<Item = UserId>,
    ) -> Self {
        let users: BTreeSet<UserId> = users.into_iter().collect();
        let team_users = team_users
            .into_iter()
            .filter(|id| !users.contains(id))
            .collect();

        Self { users, team_users }
    }

    pub fn users(&self) -> &BTreeSet<UserId> {
        &self.users
    }

    pub fn team_users(&self) -> &BTreeSet<UserId> {
        &self.team_users
    }
}
