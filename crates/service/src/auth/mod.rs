//! Auth module: signed, time-limited identity tokens.
//!
//! Stateless by construction: revoking a token is the caller's job (clearing
//! the cookie); a token stays valid until `exp` if replayed.

pub mod domain;
pub mod errors;
pub mod service;

pub use service::TokenService;
