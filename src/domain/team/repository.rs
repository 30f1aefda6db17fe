//! Team repository and membership query traits

use std::collections::HashSet;

use async_trait::async_trait;

use super::entity::{Team, TeamId};
use crate::domain::id::{OrganizationId, UserId};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Read access to teams
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Get a team by ID
    async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError>;

    /// Get every team whose ID is in `ids`; unknown IDs are skipped
    async fn get_many(&self, ids: &[TeamId]) -> Result<Vec<Team>, DomainError>;
}

/// Expands teams into the users that belong to them
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeamMembershipQuery: Send + Sync {
    /// Distinct IDs of active users holding an active membership in any of
    /// `team_ids`, restricted to teams of `organization_id` and excluding
    /// every ID in `exclude`.
    async fn get_users_from_teams(
        &self,
        organization_id: OrganizationId,
        team_ids: &[TeamId],
        exclude: &HashSet<UserId>,
    ) -> Result<Vec<UserId>, DomainError>;
}
