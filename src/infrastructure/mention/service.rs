//! Mention service - extraction of mentioned users and membership checks

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::actor::Actor;
use crate::domain::id::{OrganizationId, ProjectId, TeamId, UserId};
use crate::domain::mention::{
    separate_actors, separate_resolved_actors, MentionValidationError, MentionedUserIds,
};
use crate::domain::note::{MentionContext, NoteAttrs};
use crate::domain::project::{ProjectMembershipQuery, ProjectTeamQuery};
use crate::domain::team::TeamMembershipQuery;
use crate::domain::DomainError;
use crate::infrastructure::actor::ActorResolver;

/// Collaborators the mention service reads from
pub struct MentionServiceDeps {
    pub resolver: ActorResolver,
    pub team_members: Arc<dyn TeamMembershipQuery>,
    pub project_members: Arc<dyn ProjectMembershipQuery>,
    pub project_teams: Arc<dyn ProjectTeamQuery>,
}

/// Resolves mentions to users and validates them against project membership
pub struct MentionService {
    resolver: ActorResolver,
    team_members: Arc<dyn TeamMembershipQuery>,
    project_members: Arc<dyn ProjectMembershipQuery>,
    project_teams: Arc<dyn ProjectTeamQuery>,
}

impl std::fmt::Debug for MentionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MentionService")
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

impl MentionService {
    pub fn new(deps: MentionServiceDeps) -> Self {
        Self {
            resolver: deps.resolver,
            team_members: deps.team_members,
            project_members: deps.project_members,
            project_teams: deps.project_teams,
        }
    }

    /// Collect the user IDs reached by `mentions`
    ///
    /// Explicitly mentioned users land in `users`. Members of mentioned teams
    /// land in `team_users` unless they were also mentioned explicitly.
    pub async fn extract_user_ids_from_mentions(
        &self,
        organization_id: OrganizationId,
        mentions: &[Actor],
    ) -> Result<MentionedUserIds, DomainError> {
        let resolved = self.resolver.resolve_many(mentions).await?;
        let separated = separate_resolved_actors(resolved);

        let users: HashSet<UserId> = separated.users.iter().map(|u| u.id()).collect();
        let team_ids: Vec<TeamId> = separated.teams.iter().map(|t| t.id()).collect();

        let team_users = if team_ids.is_empty() {
            Vec::new()
        } else {
            self.team_members
                .get_users_from_teams(organization_id, &team_ids, &users)
                .await?
        };

        let mentioned = MentionedUserIds::new(users, team_users);

        debug!(
            organization = %organization_id,
            users = mentioned.users().len(),
            team_users = mentioned.team_users().len(),
            "Extracted mentioned users"
        );

        Ok(mentioned)
    }

    /// Check that every mention in `attrs` is allowed in the context's project
    ///
    /// Attributes without mentions, or a context without a group, pass
    /// through untouched. Users are checked before teams.
    pub async fn validate_mentions(
        &self,
        attrs: NoteAttrs,
        context: &MentionContext,
    ) -> Result<NoteAttrs, DomainError> {
        let Some(project_id) = context.project_id() else {
            return Ok(attrs);
        };
        let mentions = match attrs.mentions.as_deref() {
            Some(mentions) => mentions,
            None => return Ok(attrs),
        };

        self.check_mentions(project_id, mentions)
            .await
            .map_err(|e| match e {
                MentionCheckError::Rejected(rejected) => {
                    warn!(project = %project_id, error = %rejected, "Rejected mentions");
                    DomainError::from(rejected)
                }
                MentionCheckError::Lookup(err) => err,
            })?;

        info!(project = %project_id, mentions = mentions.len(), "Mentions validated");
        Ok(attrs)
    }

    async fn check_mentions(
        &self,
        project_id: ProjectId,
        mentions: &[Actor],
    ) -> Result<(), MentionCheckError> {
        let separated = separate_actors(mentions);

        let mentioned_user_ids = separated.user_ids();
        if !mentioned_user_ids.is_empty() {
            let members = self
                .project_members
                .member_user_ids(project_id, &mentioned_user_ids)
                .await?;

            let mut outsiders: Vec<UserId> =
                mentioned_user_ids.difference(&members).copied().collect();
            if !outsiders.is_empty() {
                outsiders.sort();
                return Err(MentionValidationError::NonMember {
                    user_ids: outsiders,
                }
                .into());
            }
        }

        let mentioned_team_ids = separated.team_ids();
        if !mentioned_team_ids.is_empty() {
            let associated = self
                .project_teams
                .associated_team_ids(project_id, &mentioned_team_ids)
                .await?;

            let mut unknown: Vec<TeamId> = mentioned_team_ids
                .difference(&associated)
                .copied()
                .collect();
            if !unknown.is_empty() {
                unknown.sort();
                return Err(MentionValidationError::TeamNotAssociated { team_ids: unknown }.into());
            }
        }

        Ok(())
    }
}

enum MentionCheckError {
    Rejected(MentionValidationError),
    Lookup(DomainError),
}

impl From<MentionValidationError> for MentionCheckError {
    fn from(error: MentionValidationError) -> Self {
        Self::Rejected(error)
    }
}

impl From<DomainError> for MentionCheckError {
    fn from(error: DomainError) -> Self {
        Self::Lookup(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::note::{Group, GroupId};
    use crate::domain::project::{MockProjectMembershipQuery, MockProjectTeamQuery};
    use crate::domain::team::{MockTeamMembershipQuery, MockTeamRepository, Team};
    use crate::domain::user::{MockUserRepository, User};
    use std::collections::BTreeSet;

    const ORG: OrganizationId = OrganizationId::new(1);
    const PROJECT: ProjectId = ProjectId::new(9);

    fn user(id: u64) -> Actor {
        Actor::User(UserId::new(id))
    }

    fn team(id: u64) -> Actor {
        Actor::Team(TeamId::new(id))
    }

    fn user_set(raw: &[u64]) -> BTreeSet<UserId> {
        raw.iter().copied().map(UserId::new).collect()
    }

    fn context() -> MentionContext {
        MentionContext::for_group(Group::new(GroupId::new(100), PROJECT))
    }

    fn resolving_users() -> MockUserRepository {
        let mut users = MockUserRepository::new();
        users
            .expect_get_many()
            .returning(|ids| Ok(ids.iter().map(|id| User::new(*id, "someone")).collect()));
        users
    }

    fn resolving_teams() -> MockTeamRepository {
        let mut teams = MockTeamRepository::new();
        teams.expect_get_many().returning(|ids| {
            Ok(ids
                .iter()
                .map(|id| Team::new(*id, ORG, "team", "Team"))
                .collect())
        });
        teams
    }

    struct Fakes {
        users: MockUserRepository,
        teams: MockTeamRepository,
        team_members: MockTeamMembershipQuery,
        project_members: MockProjectMembershipQuery,
        project_teams: MockProjectTeamQuery,
    }

    impl Fakes {
        fn new() -> Self {
            Self {
                users: resolving_users(),
                teams: resolving_teams(),
                team_members: MockTeamMembershipQuery::new(),
                project_members: MockProjectMembershipQuery::new(),
                project_teams: MockProjectTeamQuery::new(),
            }
        }

        fn with_project_members(mut self, raw: &'static [u64]) -> Self {
            self.project_members
                .expect_member_user_ids()
                .returning(move |_, asked| {
                    Ok(asked
                        .iter()
                        .copied()
                        .filter(|id| raw.contains(&id.value()))
                        .collect())
                });
            self
        }

        fn with_project_teams(mut self, raw: &'static [u64]) -> Self {
            self.project_teams
                .expect_associated_team_ids()
                .returning(move |_, asked| {
                    Ok(asked
                        .iter()
                        .copied()
                        .filter(|id| raw.contains(&id.value()))
                        .collect())
                });
            self
        }

        fn service(self) -> MentionService {
            MentionService::new(MentionServiceDeps {
                resolver: ActorResolver::new(Arc::new(self.users), Arc::new(self.teams)),
                team_members: Arc::new(self.team_members),
                project_members: Arc::new(self.project_members),
                project_teams: Arc::new(self.project_teams),
            })
        }
    }

    #[tokio::test]
    async fn test_extract_team_members_exclude_explicit_users() {
        let mut fakes = Fakes::new();
        fakes
            .team_members
            .expect_get_users_from_teams()
            .withf(|org, teams, exclude| {
                *org == ORG
                    && teams.to_vec() == vec![TeamId::new(5)]
                    && exclude.len() == 1
                    && exclude.contains(&UserId::new(1))
            })
            .returning(|_, _, exclude| {
                Ok([UserId::new(1), UserId::new(2)]
                    .into_iter()
                    .filter(|id| !exclude.contains(id))
                    .collect())
            });
        let service = fakes.service();

        let mentioned = service
            .extract_user_ids_from_mentions(ORG, &[team(5), user(1)])
            .await
            .unwrap();

        assert_eq!(mentioned.users(), &user_set(&[1]));
        assert_eq!(mentioned.team_users(), &user_set(&[2]));
    }

    #[tokio::test]
    async fn test_extract_stays_disjoint_when_query_ignores_exclusion() {
        let mut fakes = Fakes::new();
        fakes
            .team_members
            .expect_get_users_from_teams()
            .returning(|_, _, _| Ok(vec![UserId::new(1), UserId::new(2)]));
        let service = fakes.service();

        let mentioned = service
            .extract_user_ids_from_mentions(ORG, &[user(1), team(5)])
            .await
            .unwrap();

        assert!(mentioned.users().is_disjoint(mentioned.team_users()));
        assert_eq!(mentioned.team_users(), &user_set(&[2]));
    }

    #[tokio::test]
    async fn test_extract_without_teams_skips_membership_query() {
        let mut fakes = Fakes::new();
        fakes.team_members.expect_get_users_from_teams().never();
        let service = fakes.service();

        let mentioned = service
            .extract_user_ids_from_mentions(ORG, &[user(3), user(1), user(3)])
            .await
            .unwrap();

        assert_eq!(mentioned.users(), &user_set(&[1, 3]));
        assert!(mentioned.team_users().is_empty());
    }

    #[tokio::test]
    async fn test_extract_fails_on_unresolvable_actor() {
        let mut fakes = Fakes::new();
        fakes.users = MockUserRepository::new();
        fakes.users.expect_get_many().returning(|_| Ok(vec![]));
        let service = fakes.service();

        let result = service
            .extract_user_ids_from_mentions(ORG, &[user(4)])
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_validate_passes_members_through() {
        let service = Fakes::new()
            .with_project_members(&[1, 2])
            .with_project_teams(&[5])
            .service();
        let attrs = NoteAttrs::new("hi").with_mentions(vec![user(1), team(5), user(2)]);

        let result = service.validate_mentions(attrs.clone(), &context()).await;

        assert_eq!(result.unwrap(), attrs);
    }

    #[tokio::test]
    async fn test_validate_rejects_non_member() {
        let service = Fakes::new()
            .with_project_members(&[1, 2])
            .with_project_teams(&[])
            .service();
        let attrs = NoteAttrs::new("hi").with_mentions(vec![user(1), user(3)]);

        let error = service
            .validate_mentions(attrs, &context())
            .await
            .unwrap_err();

        assert!(matches!(error, DomainError::Validation { .. }));
        assert_eq!(
            error.to_string(),
            "Validation error: Cannot mention a non team member"
        );
    }

    #[tokio::test]
    async fn test_validate_rejects_unassociated_team() {
        let service = Fakes::new()
            .with_project_members(&[1])
            .with_project_teams(&[5])
            .service();
        let attrs = NoteAttrs::new("hi").with_mentions(vec![user(1), team(5), team(8)]);

        let error = service
            .validate_mentions(attrs, &context())
            .await
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "Validation error: Mentioned team not found or not associated with project"
        );
    }

    #[tokio::test]
    async fn test_validate_checks_users_before_teams() {
        let mut fakes = Fakes::new().with_project_members(&[]);
        fakes.project_teams.expect_associated_team_ids().never();
        let service = fakes.service();
        let attrs = NoteAttrs::new("hi").with_mentions(vec![team(8), user(3)]);

        let error = service
            .validate_mentions(attrs, &context())
            .await
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "Validation error: Cannot mention a non team member"
        );
    }

    #[tokio::test]
    async fn test_validate_without_group_passes_through() {
        let mut fakes = Fakes::new();
        fakes.project_members.expect_member_user_ids().never();
        let service = fakes.service();
        let attrs = NoteAttrs::new("hi").with_mentions(vec![user(3)]);

        let result = service
            .validate_mentions(attrs.clone(), &MentionContext::default())
            .await;

        assert_eq!(result.unwrap(), attrs);
    }

    #[tokio::test]
    async fn test_validate_without_mentions_passes_through() {
        let service = Fakes::new().service();
        let attrs = NoteAttrs::new("no mentions here");

        let result = service.validate_mentions(attrs.clone(), &context()).await;

        assert_eq!(result.unwrap(), attrs);
    }

    #[tokio::test]
    async fn test_validate_empty_mentions_skips_lookups() {
        let mut fakes = Fakes::new();
        fakes.project_members.expect_member_user_ids().never();
        fakes.project_teams.expect_associated_team_ids().never();
        let service = fakes.service();
        let attrs = NoteAttrs::new("hi").with_mentions(vec![]);

        let result = service.validate_mentions(attrs.clone(), &context()).await;

        assert_eq!(result.unwrap(), attrs);
    }

    #[tokio::test]
    async fn test_validate_teams_only_skips_member_query() {
        let mut fakes = Fakes::new().with_project_teams(&[5, 6]);
        fakes.project_members.expect_member_user_ids().never();
        let service = fakes.service();
        let attrs = NoteAttrs::new("hi").with_mentions(vec![team(5), team(6)]);

        let result = service.validate_mentions(attrs.clone(), &context()).await;

        assert_eq!(result.unwrap(), attrs);
    }

    #[tokio::test]
    async fn test_validate_surfaces_lookup_errors() {
        let mut fakes = Fakes::new();
        fakes
            .project_members
            .expect_member_user_ids()
            .returning(|_, _| Err(DomainError::storage("connection reset")));
        let service = fakes.service();
        let attrs = NoteAttrs::new("hi").with_mentions(vec![user(1)]);

        let error = service
            .validate_mentions(attrs, &context())
            .await
            .unwrap_err();

        assert!(matches!(error, DomainError::Storage { .. }));
    }
}
