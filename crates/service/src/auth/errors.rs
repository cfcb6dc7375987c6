use thiserror::Error;

/// Errors from issuing or verifying tokens
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token encode error: {0}")]
    Encode(String),
    #[error("invalid or expired token: {0}")]
    Invalid(String),
}
