use std::sync::Arc;

use models::{
    ack::{DeleteAck, InsertAck, UpdateAck},
    booking::{Booking, UpdateBookingDate},
};
use tracing::{info, instrument};

use super::repository::BookingRepository;
use crate::errors::ServiceError;

/// Booking operations. Every call is a single store round trip; store
/// failures surface unchanged as `ServiceError`.
pub struct BookingService {
    repo: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, email: Option<&str>) -> Result<Vec<Booking>, ServiceError> {
        self.repo.list(email).await
    }

    /// Insert the caller's document as-is.
    #[instrument(skip(self, booking), fields(email = ?booking.email))]
    pub async fn create(&self, booking: Booking) -> Result<InsertAck, ServiceError> {
        let ack = self.repo.insert(booking).await?;
        info!(id = %ack.inserted_id, "booking_created");
        Ok(ack)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Option<Booking>, ServiceError> {
        let oid = models::parse_object_id(id)?;
        self.repo.find_by_id(oid).await
    }

    /// Replace only `date`. A non-matching id inserts a new `{_id, date}` record.
    #[instrument(skip(self, update))]
    pub async fn update_date(&self, id: &str, update: UpdateBookingDate) -> Result<UpdateAck, ServiceError> {
        let oid = models::parse_object_id(id)?;
        let ack = self.repo.set_date_upsert(oid, &update.date).await?;
        if ack.upserted_count > 0 {
            info!(%id, "booking_upserted_on_update");
        }
        Ok(ack)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<DeleteAck, ServiceError> {
        let oid = models::parse_object_id(id)?;
        let ack = self.repo.delete_by_id(oid).await?;
        info!(%id, deleted = ack.deleted_count, "booking_deleted");
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookings::repository::memory::InMemoryBookingRepository;
    use mongodb::bson::{doc, oid::ObjectId, Bson};

    fn bookings() -> (BookingService, Arc<InMemoryBookingRepository>) {
        let repo = Arc::new(InMemoryBookingRepository::default());
        (BookingService::new(repo.clone()), repo)
    }

    fn booking(email: &str, date: &str) -> Booking {
        Booking { email: Some(email.into()), date: Some(date.into()), ..Default::default() }
    }

    #[tokio::test]
    async fn create_then_get_returns_fields() -> anyhow::Result<()> {
        let (svc, _) = bookings();
        let mut b = booking("a@x.com", "2024-01-01");
        b.details = doc! { "room": "Suite" };
        let ack = svc.create(b).await?;
        assert!(ack.acknowledged);

        let got = svc.get(&ack.inserted_id).await?.ok_or_else(|| anyhow::anyhow!("missing"))?;
        assert_eq!(got.email.as_deref(), Some("a@x.com"));
        assert_eq!(got.date, Some(Bson::from("2024-01-01")));
        assert_eq!(got.details, doc! { "room": "Suite" });
        Ok(())
    }

    #[tokio::test]
    async fn list_filters_by_exact_email() -> anyhow::Result<()> {
        let (svc, _) = bookings();
        svc.create(booking("a@x.com", "2024-01-01")).await?;
        svc.create(booking("b@x.com", "2024-01-02")).await?;
        svc.create(booking("a@x.com", "2024-01-03")).await?;
        svc.create(booking("A@x.com", "2024-01-04")).await?;

        let mine = svc.list(Some("a@x.com")).await?;
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|b| b.email.as_deref() == Some("a@x.com")));
        assert_eq!(svc.list(None).await?.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn update_existing_changes_only_date() -> anyhow::Result<()> {
        let (svc, repo) = bookings();
        let ack = svc.create(booking("a@x.com", "2024-01-01")).await?;
        let upd = svc
            .update_date(&ack.inserted_id, UpdateBookingDate { date: "2024-03-03".into() })
            .await?;
        assert_eq!((upd.matched_count, upd.modified_count, upd.upserted_count), (1, 1, 0));

        let got = svc.get(&ack.inserted_id).await?.ok_or_else(|| anyhow::anyhow!("missing"))?;
        assert_eq!(got.email.as_deref(), Some("a@x.com"));
        assert_eq!(got.date, Some(Bson::from("2024-03-03")));
        assert_eq!(repo.len().await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_id_upserts_date_only_record() -> anyhow::Result<()> {
        let (svc, _) = bookings();
        let id = ObjectId::new().to_hex();
        let upd = svc.update_date(&id, UpdateBookingDate { date: "2024-05-05".into() }).await?;
        assert_eq!(upd.upserted_id.as_deref(), Some(id.as_str()));
        assert_eq!(upd.matched_count, 0);

        let got = svc.get(&id).await?.ok_or_else(|| anyhow::anyhow!("missing"))?;
        assert_eq!(got.date, Some(Bson::from("2024-05-05")));
        assert_eq!(got.email, None);
        assert!(got.details.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn delete_then_get_is_none() -> anyhow::Result<()> {
        let (svc, _) = bookings();
        let ack = svc.create(booking("a@x.com", "2024-01-01")).await?;
        assert_eq!(svc.delete(&ack.inserted_id).await?.deleted_count, 1);
        assert!(svc.get(&ack.inserted_id).await?.is_none());
        assert_eq!(svc.delete(&ack.inserted_id).await?.deleted_count, 0);
        Ok(())
    }

    #[tokio::test]
    async fn malformed_ids_are_rejected_before_the_store() {
        let (svc, repo) = bookings();
        assert!(matches!(svc.get("xyz").await, Err(ServiceError::InvalidId(_))));
        assert!(matches!(svc.delete("xyz").await, Err(ServiceError::InvalidId(_))));
        let upd = svc.update_date("xyz", UpdateBookingDate { date: "d".into() }).await;
        assert!(matches!(upd, Err(ServiceError::InvalidId(_))));
        assert_eq!(repo.len().await, 0);
    }
}
