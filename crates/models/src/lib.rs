//! Typed document records for the hotel room store.
//!
//! Records mirror what lives in the `services` and `bookings` collections.
//! Only the fields the API reads are typed (`FieldValue` for the sort key,
//! raw BSON for booking dates); everything else is carried as a flattened
//! BSON document and rendered back unchanged.

pub mod ack;
pub mod booking;
pub mod db;
pub mod errors;
pub mod field;
pub mod service;

pub use mongodb::bson;

use mongodb::bson::oid::ObjectId;

use crate::errors::ModelError;

pub const SERVICES_COLLECTION: &str = "services";
pub const BOOKINGS_COLLECTION: &str = "bookings";

/// Parse a path identifier into the store's native id type.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, ModelError> {
    ObjectId::parse_str(raw).map_err(|e| ModelError::InvalidId(format!("{raw:?}: {e}")))
}
