use std::sync::Arc;

use models::service::Service;
use tracing::{debug, instrument};

use super::repository::ServiceRepository;
use crate::errors::ServiceError;

pub struct CatalogService {
    repo: Arc<dyn ServiceRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn ServiceRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Service>, ServiceError> {
        let items = self.repo.list_by_availability_desc().await?;
        debug!(count = items.len(), "services_listed");
        Ok(items)
    }

    /// `Ok(None)` when nothing matches; a malformed id is an error.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Option<Service>, ServiceError> {
        let oid = models::parse_object_id(id)?;
        self.repo.find_by_id(oid).await
    }
}
