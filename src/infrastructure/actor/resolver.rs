//! Resolves actor references to users and teams

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::actor::{Actor, ResolvedActor};
use crate::domain::mention::separate_actors;
use crate::domain::team::{Team, TeamRepository};
use crate::domain::user::UserRepository;
use crate::domain::DomainError;

/// Turns [`Actor`] references into the entities they name
pub struct ActorResolver {
    users: Arc<dyn UserRepository>,
    teams: Arc<dyn TeamRepository>,
}

impl std::fmt::Debug for ActorResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActorResolver").finish_non_exhaustive()
    }
}

impl ActorResolver {
    pub fn new(users: Arc<dyn UserRepository>, teams: Arc<dyn TeamRepository>) -> Self {
        Self { users, teams }
    }

    /// Resolve a single actor, failing if the entity does not exist
    ///
    /// A team that is pending deletion or being deleted counts as missing.
    pub async fn resolve(&self, actor: &Actor) -> Result<ResolvedActor, DomainError> {
        let resolved = match actor {
            Actor::User(id) => self.users.get(id).await?.map(ResolvedActor::User),
            Actor::Team(id) => self
                .teams
                .get(id)
                .await?
                .filter(Team::is_active)
                .map(ResolvedActor::Team),
        };

        resolved.ok_or_else(|| not_found(actor))
    }

    /// Resolve many actors with one lookup per actor type
    ///
    /// The output follows the input order. The first reference that cannot
    /// be resolved fails the whole call.
    pub async fn resolve_many(&self, actors: &[Actor]) -> Result<Vec<ResolvedActor>, DomainError> {
        let separated = separate_actors(actors);

        let users: HashMap<_, _> = if separated.users.is_empty() {
            HashMap::new()
        } else {
            self.users
                .get_many(&separated.users)
                .await?
                .into_iter()
                .map(|u| (u.id(), u))
                .collect()
        };

        let teams: HashMap<_, _> = if separated.teams.is_empty() {
            HashMap::new()
        } else {
            self.teams
                .get_many(&separated.teams)
                .await?
                .into_iter()
                .filter(Team::is_active)
                .map(|t| (t.id(), t))
                .collect()
        };

        debug!(
            users = users.len(),
            teams = teams.len(),
            requested = actors.len(),
            "Resolved actors"
        );

        actors
            .iter()
            .map(|actor| {
                let resolved = match actor {
                    Actor::User(id) => users.get(id).cloned().map(ResolvedActor::User),
                    Actor::Team(id) => teams.get(id).cloned().map(ResolvedActor::Team),
                };
                resolved.ok_or_else(|| not_found(actor))
            })
            .collect()
    }
}

fn not_found(actor: &Actor) -> DomainError {
    DomainError::not_found(format!("Actor '{}' not found", actor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id::{OrganizationId, TeamId, UserId};
    use crate::domain::team::{MockTeamRepository, TeamStatus};
    use crate::domain::user::{MockUserRepository, User};
    use mockall::predicate::eq;

    fn team(id: u64) -> Team {
        Team::new(TeamId::new(id), OrganizationId::new(1), "core", "Core")
    }

    #[tokio::test]
    async fn test_resolve_user() {
        let mut users = MockUserRepository::new();
        users
            .expect_get()
            .with(eq(UserId::new(1)))
            .returning(|id| Ok(Some(User::new(*id, "alice"))));
        let resolver = ActorResolver::new(Arc::new(users), Arc::new(MockTeamRepository::new()));

        let resolved = resolver.resolve(&Actor::User(UserId::new(1))).await.unwrap();
        assert_eq!(resolved, ResolvedActor::User(User::new(UserId::new(1), "alice")));
    }

    #[tokio::test]
    async fn test_resolve_missing_team() {
        let mut teams = MockTeamRepository::new();
        teams.expect_get().returning(|_| Ok(None));
        let resolver = ActorResolver::new(Arc::new(MockUserRepository::new()), Arc::new(teams));

        let error = resolver
            .resolve(&Actor::Team(TeamId::new(5)))
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "Not found: Actor 'team:5' not found");
    }

    #[tokio::test]
    async fn test_resolve_team_pending_deletion_is_not_found() {
        let mut teams = MockTeamRepository::new();
        teams
            .expect_get()
            .returning(|id| Ok(Some(team(id.value()).with_status(TeamStatus::PendingDeletion))));
        let resolver = ActorResolver::new(Arc::new(MockUserRepository::new()), Arc::new(teams));

        let error = resolver
            .resolve(&Actor::Team(TeamId::new(7)))
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "Not found: Actor 'team:7' not found");
    }

    #[tokio::test]
    async fn test_resolve_many_rejects_teams_being_deleted() {
        let mut teams = MockTeamRepository::new();
        teams.expect_get_many().returning(|_| {
            Ok(vec![
                team(5),
                team(7).with_status(TeamStatus::DeletionInProgress),
            ])
        });
        let resolver = ActorResolver::new(Arc::new(MockUserRepository::new()), Arc::new(teams));

        let error = resolver
            .resolve_many(&[Actor::Team(TeamId::new(5)), Actor::Team(TeamId::new(7))])
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "Not found: Actor 'team:7' not found");
    }

    #[tokio::test]
    async fn test_resolve_many_preserves_order() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_many()
            .times(1)
            .returning(|ids| Ok(ids.iter().map(|id| User::new(*id, "someone")).collect()));
        let mut teams = MockTeamRepository::new();
        teams
            .expect_get_many()
            .times(1)
            .returning(|_| Ok(vec![team(5)]));
        let resolver = ActorResolver::new(Arc::new(users), Arc::new(teams));

        let actors = vec![
            Actor::User(UserId::new(2)),
            Actor::Team(TeamId::new(5)),
            Actor::User(UserId::new(1)),
        ];
        let resolved = resolver.resolve_many(&actors).await.unwrap();

        assert_eq!(
            resolved,
            vec![
                ResolvedActor::User(User::new(UserId::new(2), "someone")),
                ResolvedActor::Team(team(5)),
                ResolvedActor::User(User::new(UserId::new(1), "someone")),
            ]
        );
    }

    #[tokio::test]
    async fn test_resolve_many_skips_lookup_for_absent_type() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_many()
            .returning(|ids| Ok(ids.iter().map(|id| User::new(*id, "someone")).collect()));
        let mut teams = MockTeamRepository::new();
        teams.expect_get_many().never();
        let resolver = ActorResolver::new(Arc::new(users), Arc::new(teams));

        let resolved = resolver
            .resolve_many(&[Actor::User(UserId::new(1))])
            .await
            .unwrap();
        assert_eq!(resolved.len(), 1);
    }

    #[tokio::test]
    async fn test_resolve_many_fails_on_deleted_entity() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_many()
            .returning(|_| Ok(vec![User::new(UserId::new(1), "alice")]));
        let resolver = ActorResolver::new(Arc::new(users), Arc::new(MockTeamRepository::new()));

        let result = resolver
            .resolve_many(&[Actor::User(UserId::new(1)), Actor::User(UserId::new(3))])
            .await;
        assert!(matches!(result, Err(DomainError::NotFound { message }) if message.contains("user:3")));
    }
}
