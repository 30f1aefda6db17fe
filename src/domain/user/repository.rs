//! User repository trait

use async_trait::async_trait;

use super::entity::{User, UserId};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Read access to user accounts
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get a user by ID
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Get every user whose ID is in `ids`; unknown IDs are skipped
    async fn get_many(&self, ids: &[UserId]) -> Result<Vec<User>, DomainError>;
}
