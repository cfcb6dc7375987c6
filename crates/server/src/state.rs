use std::sync::Arc;

use mongodb::Database;
use service::{
    auth::TokenService,
    bookings::{BookingRepository, BookingService, MongoBookingRepository},
    catalog::{CatalogService, MongoServiceRepository, ServiceRepository},
};

/// Shared handles injected into every handler. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenService>,
    pub catalog: Arc<CatalogService>,
    pub bookings: Arc<BookingService>,
}

impl AppState {
    pub fn new(
        tokens: TokenService,
        services: Arc<dyn ServiceRepository>,
        bookings: Arc<dyn BookingRepository>,
    ) -> Self {
        Self {
            tokens: Arc::new(tokens),
            catalog: Arc::new(CatalogService::new(services)),
            bookings: Arc::new(BookingService::new(bookings)),
        }
    }

    /// Wire the MongoDB repositories over one long-lived database handle.
    pub fn from_database(db: &Database, auth: &configs::AuthConfig) -> Self {
        Self::new(
            TokenService::new(&auth.token_secret, auth.token_ttl_secs),
            Arc::new(MongoServiceRepository::new(db)),
            Arc::new(MongoBookingRepository::new(db)),
        )
    }
}
