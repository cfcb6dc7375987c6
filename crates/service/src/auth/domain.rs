use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity payload supplied at `/jwt` and carried inside the token.
///
/// Only `email` is interpreted; everything else rides along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Identity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identity {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self { email: Some(email.into()), extra: Map::new() }
    }
}

/// Signed claims: the identity plus issue and expiry timestamps (unix seconds).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(flatten)]
    pub identity: Identity,
    pub iat: i64,
    pub exp: i64,
}
