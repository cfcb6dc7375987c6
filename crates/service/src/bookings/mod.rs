//! Create/read/update/delete over the `bookings` collection.

pub mod repository;
pub mod service;

pub use repository::{BookingRepository, MongoBookingRepository};
pub use service::BookingService;
