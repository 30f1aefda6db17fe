//! Storage-backed project repository implementation

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::project::{Project, ProjectId, ProjectRepository};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Storage-backed implementation of ProjectRepository
#[derive(Debug)]
pub struct StorageProjectRepository {
    storage: Arc<dyn Storage<Project>>,
}

impl StorageProjectRepository {
    pub fn new(storage: Arc<dyn Storage<Project>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl ProjectRepository for StorageProjectRepository {
    async fn get(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        self.storage.get(id).await
    }
}
