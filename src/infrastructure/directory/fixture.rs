//! JSON directory fixtures

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::domain::id::{OrganizationId, ProjectId, TeamId, UserId};
use crate::domain::project::{Project, ProjectMember, ProjectRepository, ProjectTeam};
use crate::domain::team::{Team, TeamMember, TeamStatus};
use crate::domain::user::{User, UserStatus};
use crate::domain::DomainError;
use crate::infrastructure::actor::ActorResolver;
use crate::infrastructure::membership::InMemoryMembershipStore;
use crate::infrastructure::mention::{MentionService, MentionServiceDeps};
use crate::infrastructure::project::StorageProjectRepository;
use crate::infrastructure::storage::InMemoryStorage;
use crate::infrastructure::team::StorageTeamRepository;
use crate::infrastructure::user::StorageUserRepository;

#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub status: UserStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamRecord {
    pub id: TeamId,
    pub organization_id: OrganizationId,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub status: TeamStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub organization_id: OrganizationId,
    pub slug: String,
}

/// Serialized form of a directory
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DirectoryFixture {
    pub users: Vec<UserRecord>,
    pub teams: Vec<TeamRecord>,
    pub projects: Vec<ProjectRecord>,
    pub team_members: Vec<TeamMember>,
    pub project_members: Vec<ProjectMember>,
    pub project_teams: Vec<ProjectTeam>,
}

impl DirectoryFixture {
    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::configuration(format!("Invalid directory fixture: {}", e)))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            DomainError::configuration(format!(
                "Failed to read directory fixture '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json_str(&json)
    }
}

/// Loaded directory with every store needed for mention handling
#[derive(Debug)]
pub struct Directory {
    users: Arc<InMemoryStorage<User>>,
    teams: Arc<InMemoryStorage<Team>>,
    projects: Arc<InMemoryStorage<Project>>,
    memberships: Arc<InMemoryMembershipStore>,
}

impl Directory {
    /// Build a directory, rejecting duplicates and dangling references
    pub fn from_fixture(fixture: DirectoryFixture) -> Result<Self, DomainError> {
        let users = build_users(fixture.users)?;
        let teams = build_teams(fixture.teams)?;
        let projects = build_projects(fixture.projects)?;

        let user_ids: HashSet<UserId> = users.iter().map(User::id).collect();
        let team_ids: HashSet<TeamId> = teams.iter().map(Team::id).collect();
        let project_ids: HashSet<ProjectId> = projects.iter().map(Project::id).collect();

        let users = Arc::new(InMemoryStorage::with_entities(users));
        let teams = Arc::new(InMemoryStorage::with_entities(teams));
        let projects = Arc::new(InMemoryStorage::with_entities(projects));
        let memberships = Arc::new(InMemoryMembershipStore::new(teams.clone(), users.clone()));

        for member in fixture.team_members {
            require(&team_ids, member.team_id, "team member")?;
            require(&user_ids, member.user_id, "team member")?;
            memberships.add_team_member(member)?;
        }

        for member in fixture.project_members {
            require(&project_ids, member.project_id, "project member")?;
            require(&user_ids, member.user_id, "project member")?;
            memberships.add_project_member(member)?;
        }

        for association in fixture.project_teams {
            require(&project_ids, association.project_id, "project team")?;
            require(&team_ids, association.team_id, "project team")?;
            memberships.add_project_team(association)?;
        }

        info!(
            users = user_ids.len(),
            teams = team_ids.len(),
            projects = project_ids.len(),
            "Directory loaded"
        );

        Ok(Self {
            users,
            teams,
            projects,
            memberships,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        Self::from_fixture(DirectoryFixture::load(path)?)
    }

    /// Mention service reading from this directory
    pub fn mention_service(&self) -> MentionService {
        let resolver = ActorResolver::new(
            Arc::new(StorageUserRepository::new(self.users.clone())),
            Arc::new(StorageTeamRepository::new(self.teams.clone())),
        );

        MentionService::new(MentionServiceDeps {
            resolver,
            team_members: self.memberships.clone(),
            project_members: self.memberships.clone(),
            project_teams: self.memberships.clone(),
        })
    }

    pub fn project_repository(&self) -> Arc<dyn ProjectRepository> {
        Arc::new(StorageProjectRepository::new(self.projects.clone()))
    }
}

fn build_users(records: Vec<UserRecord>) -> Result<Vec<User>, DomainError> {
    let mut seen = HashSet::new();

    records
        .into_iter()
        .map(|r| {
            unique(&mut seen, r.id)?;
            Ok(User::new(r.id, r.username).with_status(r.status))
        })
        .collect()
}

fn build_teams(records: Vec<TeamRecord>) -> Result<Vec<Team>, DomainError> {
    let mut seen = HashSet::new();

    records
        .into_iter()
        .map(|r| {
            unique(&mut seen, r.id)?;
            Ok(Team::new(r.id, r.organization_id, r.slug, r.name).with_status(r.status))
        })
        .collect()
}

fn build_projects(records: Vec<ProjectRecord>) -> Result<Vec<Project>, DomainError> {
    let mut seen = HashSet::new();

    records
        .into_iter()
        .map(|r| {
            unique(&mut seen, r.id)?;
            Ok(Project::new(r.id, r.organization_id, r.slug))
        })
        .collect()
}

fn unique<K>(seen: &mut HashSet<K>, id: K) -> Result<(), DomainError>
where
    K: std::hash::Hash + Eq + std::fmt::Display + Copy,
{
    if !seen.insert(id) {
        return Err(DomainError::conflict(format!("Duplicate entry '{}'", id)));
    }
    Ok(())
}

fn require<K>(known: &HashSet<K>, id: K, record: &str) -> Result<(), DomainError>
where
    K: std::hash::Hash + Eq + std::fmt::Display,
{
    if !known.contains(&id) {
        return Err(DomainError::validation(format!(
            "{} references unknown '{}'",
            record, id
        )));
    }
    Ok(())
}
