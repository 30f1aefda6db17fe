//! In-memory membership tables

use std::collections::{BTreeSet, HashSet};
use std::fmt::Debug;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::id::{OrganizationId, ProjectId, TeamId, UserId};
use crate::domain::project::{ProjectMember, ProjectMembershipQuery, ProjectTeam, ProjectTeamQuery};
use crate::domain::storage::Storage;
use crate::domain::team::{Team, TeamMember, TeamMembershipQuery};
use crate::domain::user::User;
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Tables {
    team_members: HashSet<TeamMember>,
    project_members: HashSet<ProjectMember>,
    project_teams: HashSet<ProjectTeam>,
}

/// Membership and association records held in memory
///
/// Team expansion consults the team and user storages so that teams of other
/// organizations and inactive users are left out. Team status is not checked
/// here; the actor resolver refuses teams that are not active.
#[derive(Debug)]
pub struct InMemoryMembershipStore {
    teams: Arc<dyn Storage<Team>>,
    users: Arc<dyn Storage<User>>,
    tables: RwLock<Tables>,
}

impl InMemoryMembershipStore {
    pub fn new(teams: Arc<dyn Storage<Team>>, users: Arc<dyn Storage<User>>) -> Self {
        Self {
            teams,
            users,
            tables: RwLock::new(Tables::default()),
        }
    }

    pub fn add_team_member(&self, member: TeamMember) -> Result<(), DomainError> {
        let mut tables = self.write()?;
        // a later record for the same pair replaces the earlier one
        tables
            .team_members
            .retain(|m| !(m.team_id == member.team_id && m.user_id == member.user_id));
        tables.team_members.insert(member);
        Ok(())
    }

    pub fn add_project_member(&self, member: ProjectMember) -> Result<(), DomainError> {
        self.write()?.project_members.insert(member);
        Ok(())
    }

    pub fn add_project_team(&self, association: ProjectTeam) -> Result<(), DomainError> {
        self.write()?.project_teams.insert(association);
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, DomainError> {
        self.tables
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, DomainError> {
        self.tables
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))
    }
}

#[async_trait]
impl TeamMembershipQuery for InMemoryMembershipStore {
    async fn get_users_from_teams(
        &self,
        organization_id: OrganizationId,
        team_ids: &[TeamId],
        exclude: &HashSet<UserId>,
    ) -> Result<Vec<UserId>, DomainError> {
        let in_organization: HashSet<TeamId> = self
            .teams
            .get_many(team_ids)
            .await?
            .into_iter()
            .filter(|t| t.organization_id() == organization_id)
            .map(|t| t.id())
            .collect();

        let candidates: Vec<UserId> = {
            let tables = self.read()?;
            tables
                .team_members
                .iter()
                .filter(|m| m.is_active && in_organization.contains(&m.team_id))
                .map(|m| m.user_id)
                .filter(|id| !exclude.contains(id))
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect()
        };

        let users = self.users.get_many(&candidates).await?;
        let user_ids: Vec<UserId> = users
            .into_iter()
            .filter(|u| u.is_active())
            .map(|u| u.id())
            .collect();

        debug!(
            organization = %organization_id,
            teams = in_organization.len(),
            users = user_ids.len(),
            "Expanded team members"
        );

        Ok(user_ids)
    }
}

#[async_trait]
impl ProjectMembershipQuery for InMemoryMembershipStore {
    async fn member_user_ids(
        &self,
        project_id: ProjectId,
        user_ids: &HashSet<UserId>,
    ) -> Result<HashSet<UserId>, DomainError> {
        let tables = self.read()?;

        Ok(user_ids
            .iter()
            .copied()
            .filter(|&user_id| {
                tables
                    .project_members
                    .contains(&ProjectMember { project_id, user_id })
            })
            .collect())
    }
}

#[async_trait]
impl ProjectTeamQuery for InMemoryMembershipStore {
    async fn associated_team_ids(
        &self,
        project_id: ProjectId,
        team_ids: &HashSet<TeamId>,
    ) -> Result<HashSet<TeamId>, DomainError> {
        let tables = self.read()?;

        Ok(team_ids
            .iter()
            .copied()
            .filter(|&team_id| {
                tables
                    .project_teams
                    .contains(&ProjectTeam { project_id, team_id })
            })
            .collect())
    }
}
