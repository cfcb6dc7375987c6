use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::FindOptions,
    Collection, Database,
};
use models::{service::Service, SERVICES_COLLECTION};

use crate::errors::ServiceError;

/// Persistence for service records.
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// All records, highest availability first.
    async fn list_by_availability_desc(&self) -> Result<Vec<Service>, ServiceError>;
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Service>, ServiceError>;
}

/// MongoDB-backed repository.
pub struct MongoServiceRepository {
    collection: Collection<Service>,
}

impl MongoServiceRepository {
    pub fn new(db: &Database) -> Self {
        Self { collection: db.collection(SERVICES_COLLECTION) }
    }
}

#[async_trait]
impl ServiceRepository for MongoServiceRepository {
    async fn list_by_availability_desc(&self) -> Result<Vec<Service>, ServiceError> {
        let opts = FindOptions::builder().sort(doc! { "availability": -1 }).build();
        let cursor = self.collection.find(None, opts).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Service>, ServiceError> {
        Ok(self.collection.find_one(doc! { "_id": id }, None).await?)
    }
}

/// In-memory repository for tests and local runs without a store.
pub mod memory {
    use super::*;
    use models::field::cmp_store_order;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct InMemoryServiceRepository {
        items: RwLock<Vec<Service>>,
    }

    impl InMemoryServiceRepository {
        /// Seed with records; missing ids are assigned the way the store would.
        pub fn with_services(services: Vec<Service>) -> Self {
            let items = services
                .into_iter()
                .map(|mut s| {
                    s.id.get_or_insert_with(ObjectId::new);
                    s
                })
                .collect();
            Self { items: RwLock::new(items) }
        }
    }

    #[async_trait]
    impl ServiceRepository for InMemoryServiceRepository {
        async fn list_by_availability_desc(&self) -> Result<Vec<Service>, ServiceError> {
            let mut out = self.items.read().await.clone();
            out.sort_by(|a, b| cmp_store_order(b.availability.as_ref(), a.availability.as_ref()));
            Ok(out)
        }

        async fn find_by_id(&self, id: ObjectId) -> Result<Option<Service>, ServiceError> {
            let items = self.items.read().await;
            Ok(items.iter().find(|s| s.id == Some(id)).cloned())
        }
    }
}
