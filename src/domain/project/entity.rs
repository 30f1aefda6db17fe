//! Project entity and membership records

use serde::{Deserialize, Serialize};

use crate::domain::id::{OrganizationId, TeamId, UserId};
use crate::domain::storage::StorageEntity;

pub use crate::domain::id::ProjectId;

/// Project entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    organization_id: OrganizationId,
    slug: String,
}

impl Project {
    pub fn new(
        id: ProjectId,
        organization_id: OrganizationId,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            id,
            organization_id,
            slug: slug.into(),
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn organization_id(&self) -> OrganizationId {
        self.organization_id
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}

impl StorageEntity for Project {
    type Key = ProjectId;

    fn key(&self) -> Self::Key {
        self.id
    }
}

/// Grants a user access to a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectMember {
    pub project_id: ProjectId,
    pub user_id: UserId,
}

/// Links a team to a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectTeam {
    pub project_id: ProjectId,
    pub team_id: TeamId,
}
