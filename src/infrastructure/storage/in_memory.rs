//! In-memory storage implementation

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{RwLock, RwLockReadGuard};

use async_trait::async_trait;

use crate::domain::storage::{Storage, StorageEntity};
use crate::domain::DomainError;

/// Thread-safe in-memory storage implementation
///
/// Backs the directory loaded from a fixture and the unit tests. Data is lost
/// when the process terminates.
#[derive(Debug)]
pub struct InMemoryStorage<E>
where
    E: StorageEntity,
{
    entities: RwLock<HashMap<E::Key, E>>,
}

impl<E> InMemoryStorage<E>
where
    E: StorageEntity,
{
    /// Creates storage pre-populated with entities; later duplicates win
    pub fn with_entities(entities: impl IntoIterator<Item = E>) -> Self {
        let map = entities.into_iter().map(|e| (e.key(), e)).collect();

        Self {
            entities: RwLock::new(map),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<E::Key, E>>, DomainError> {
        self.entities
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))
    }
}

#[async_trait]
impl<E> Storage<E> for InMemoryStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        Ok(self.read()?.get(key).cloned())
    }

    async fn get_many(&self, keys: &[E::Key]) -> Result<Vec<E>, DomainError> {
        let entities = self.read()?;
        Ok(keys.iter().filter_map(|k| entities.get(k).cloned()).collect())
    }
}
