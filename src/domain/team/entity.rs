//! Team entity and related types

use serde::{Deserialize, Serialize};

use crate::domain::id::{OrganizationId, UserId};
use crate::domain::storage::StorageEntity;

pub use crate::domain::id::TeamId;

/// Lifecycle status of a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TeamStatus {
    #[default]
    Active,
    /// Deletion was requested but has not started
    PendingDeletion,
    DeletionInProgress,
}

impl TeamStatus {
    /// Teams in any other status are on their way out and cannot be mentioned
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl std::fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::PendingDeletion => write!(f, "pending_deletion"),
            Self::DeletionInProgress => write!(f, "deletion_in_progress"),
        }
    }
}

/// Team entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    organization_id: OrganizationId,
    slug: String,
    name: String,
    status: TeamStatus,
}

impl Team {
    /// Create a new active team
    pub fn new(
        id: TeamId,
        organization_id: OrganizationId,
        slug: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            organization_id,
            slug: slug.into(),
            name: name.into(),
            status: TeamStatus::Active,
        }
    }

    /// Set status (builder pattern)
    pub fn with_status(mut self, status: TeamStatus) -> Self {
        self.status = status;
        self
    }

    // Getters

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn organization_id(&self) -> OrganizationId {
        self.organization_id
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> TeamStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

impl StorageEntity for Team {
    type Key = TeamId;

    fn key(&self) -> Self::Key {
        self.id
    }
}

/// A user's membership in a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMember {
    pub team_id: TeamId,
    pub user_id: UserId,
    /// Inactive memberships are kept for history but grant nothing
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl TeamMember {
    pub fn new(team_id: TeamId, user_id: UserId) -> Self {
        Self {
            team_id,
            user_id,
            is_active: true,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

fn default_true() -> bool {
    true
}
