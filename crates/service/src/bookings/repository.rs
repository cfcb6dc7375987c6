use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, Document},
    options::UpdateOptions,
    Collection, Database,
};
use models::{
    ack::{id_to_string, DeleteAck, InsertAck, UpdateAck},
    booking::Booking,
    BOOKINGS_COLLECTION,
};

use crate::errors::ServiceError;

/// Persistence for booking records.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Every booking, or only those whose `email` equals the filter exactly.
    async fn list(&self, email: Option<&str>) -> Result<Vec<Booking>, ServiceError>;
    async fn insert(&self, booking: Booking) -> Result<InsertAck, ServiceError>;
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Booking>, ServiceError>;
    /// Set `date` on the matching record, inserting `{_id, date}` when none matches.
    async fn set_date_upsert(&self, id: ObjectId, date: &str) -> Result<UpdateAck, ServiceError>;
    async fn delete_by_id(&self, id: ObjectId) -> Result<DeleteAck, ServiceError>;
}

/// MongoDB-backed repository.
pub struct MongoBookingRepository {
    collection: Collection<Booking>,
}

impl MongoBookingRepository {
    pub fn new(db: &Database) -> Self {
        Self { collection: db.collection(BOOKINGS_COLLECTION) }
    }
}

#[async_trait]
impl BookingRepository for MongoBookingRepository {
    async fn list(&self, email: Option<&str>) -> Result<Vec<Booking>, ServiceError> {
        let filter = match email {
            Some(e) => doc! { "email": e },
            None => Document::new(),
        };
        let cursor = self.collection.find(filter, None).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert(&self, booking: Booking) -> Result<InsertAck, ServiceError> {
        let res = self.collection.insert_one(&booking, None).await?;
        Ok(InsertAck { acknowledged: true, inserted_id: id_to_string(&res.inserted_id) })
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Booking>, ServiceError> {
        Ok(self.collection.find_one(doc! { "_id": id }, None).await?)
    }

    async fn set_date_upsert(&self, id: ObjectId, date: &str) -> Result<UpdateAck, ServiceError> {
        let opts = UpdateOptions::builder().upsert(true).build();
        let res = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "date": date } }, opts)
            .await?;
        Ok(UpdateAck {
            acknowledged: true,
            matched_count: res.matched_count,
            modified_count: res.modified_count,
            upserted_count: u64::from(res.upserted_id.is_some()),
            upserted_id: res.upserted_id.as_ref().map(id_to_string),
        })
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<DeleteAck, ServiceError> {
        let res = self.collection.delete_one(doc! { "_id": id }, None).await?;
        Ok(DeleteAck::new(res.deleted_count))
    }
}

/// In-memory repository for tests and local runs without a store.
pub mod memory {
    use super::*;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct InMemoryBookingRepository {
        items: RwLock<Vec<Booking>>,
    }

    impl InMemoryBookingRepository {
        pub async fn len(&self) -> usize {
            self.items.read().await.len()
        }
    }

    #[async_trait]
    impl BookingRepository for InMemoryBookingRepository {
        async fn list(&self, email: Option<&str>) -> Result<Vec<Booking>, ServiceError> {
            let items = self.items.read().await;
            Ok(items
                .iter()
                .filter(|b| email.map_or(true, |e| b.email.as_deref() == Some(e)))
                .cloned()
                .collect())
        }

        async fn insert(&self, mut booking: Booking) -> Result<InsertAck, ServiceError> {
            let id = *booking.id.get_or_insert_with(ObjectId::new);
            let mut items = self.items.write().await;
            if items.iter().any(|b| b.id == Some(id)) {
                return Err(ServiceError::Db(format!("duplicate key: _id {}", id.to_hex())));
            }
            items.push(booking);
            Ok(InsertAck::new(id))
        }

        async fn find_by_id(&self, id: ObjectId) -> Result<Option<Booking>, ServiceError> {
            let items = self.items.read().await;
            Ok(items.iter().find(|b| b.id == Some(id)).cloned())
        }

        async fn set_date_upsert(&self, id: ObjectId, date: &str) -> Result<UpdateAck, ServiceError> {
            let mut items = self.items.write().await;
            let date = Bson::String(date.to_owned());
            if let Some(existing) = items.iter_mut().find(|b| b.id == Some(id)) {
                let modified = existing.date.as_ref() != Some(&date);
                existing.date = Some(date);
                return Ok(UpdateAck::matched(modified));
            }
            items.push(Booking { id: Some(id), date: Some(date), ..Default::default() });
            Ok(UpdateAck::upserted(id))
        }

        async fn delete_by_id(&self, id: ObjectId) -> Result<DeleteAck, ServiceError> {
            let mut items = self.items.write().await;
            let before = items.len();
            if let Some(pos) = items.iter().position(|b| b.id == Some(id)) {
                items.remove(pos);
            }
            Ok(DeleteAck::new((before - items.len()) as u64))
        }
    }
}
