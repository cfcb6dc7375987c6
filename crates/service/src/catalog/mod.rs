//! Read-only listing and lookup over the `services` collection.

pub mod repository;
pub mod service;

pub use repository::{MongoServiceRepository, ServiceRepository};
pub use service::CatalogService;
