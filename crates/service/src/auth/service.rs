use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, instrument};

use super::domain::{Claims, Identity};
use super::errors::TokenError;

/// Issues and verifies HS256 tokens with a process-wide secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl TokenService {
    pub const DEFAULT_TTL_SECS: i64 = 3600;

    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(Self::DEFAULT_TTL_SECS),
        }
    }

    /// Sign `identity` with an expiry one TTL from now.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{TokenService, domain::Identity};
    /// let svc = TokenService::new("secret", 3600);
    /// let token = svc.issue(Identity::with_email("guest@hotel.test")).unwrap();
    /// let back = svc.verify(&token).unwrap();
    /// assert_eq!(back.email.as_deref(), Some("guest@hotel.test"));
    /// ```
    pub fn issue(&self, identity: Identity) -> Result<String, TokenError> {
        self.issue_at(identity, Utc::now())
    }

    #[instrument(skip(self, identity), fields(email = ?identity.email))]
    pub fn issue_at(&self, mut identity: Identity, now: DateTime<Utc>) -> Result<String, TokenError> {
        // timestamps are ours; caller-supplied ones would shadow them
        identity.extra.remove("iat");
        identity.extra.remove("exp");

        let iat = now.timestamp();
        let claims = Claims { identity, iat, exp: iat.saturating_add(self.ttl_secs) };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Encode(e.to_string()))?;
        debug!(exp = claims.exp, "token_issued");
        Ok(token)
    }

    /// Check signature and expiry; hand back the embedded identity.
    pub fn verify(&self, token: &str) -> Result<Identity, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims.identity)
            .map_err(|e| TokenError::Invalid(e.to_string()))
    }
}
