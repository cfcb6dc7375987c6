//! Service layer for the hotel room backend.
//! - Token issuing/verification independent of the web framework.
//! - Read-only service catalog and booking CRUD behind repository traits,
//!   with MongoDB-backed and in-memory implementations.

pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod errors;
