//! Request-gating and request-logging middleware, attached per route.

pub mod guard;
pub mod request_log;

pub use guard::{require_token, TOKEN_COOKIE};
pub use request_log::log_request;
