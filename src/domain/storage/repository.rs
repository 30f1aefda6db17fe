//! Storage trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entity::StorageEntity;

/// Read access to keyed directory entities
#[async_trait]
pub trait Storage<E>: Send + Sync + Debug
where
    E: StorageEntity + 'static,
{
    /// Retrieves an entity by its key
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError>;

    /// Retrieves every entity whose key is in `keys`, in the order of `keys`.
    /// Missing keys are skipped.
    async fn get_many(&self, keys: &[E::Key]) -> Result<Vec<E>, DomainError> {
        let mut found = Vec::with_capacity(keys.len());

        for key in keys {
            if let Some(entity) = self.get(key).await? {
                found.push(entity);
            }
        }

        Ok(found)
    }
}
