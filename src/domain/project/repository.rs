//! Project repository and membership query traits

use std::collections::HashSet;

use async_trait::async_trait;

use super::entity::{Project, ProjectId};
use crate::domain::id::{TeamId, UserId};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Read access to projects
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn get(&self, id: &ProjectId) -> Result<Option<Project>, DomainError>;
}

/// Answers which users are members of a project
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProjectMembershipQuery: Send + Sync {
    /// The subset of `user_ids` that are members of `project_id`
    async fn member_user_ids(
        &self,
        project_id: ProjectId,
        user_ids: &HashSet<UserId>,
    ) -> Result<HashSet<UserId>, DomainError>;
}

/// Answers which teams are associated with a project
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProjectTeamQuery: Send + Sync {
    /// The subset of `team_ids` associated with `project_id`
    async fn associated_team_ids(
        &self,
        project_id: ProjectId,
        team_ids: &HashSet<TeamId>,
    ) -> Result<HashSet<TeamId>, DomainError>;
}
