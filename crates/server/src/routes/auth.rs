use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use service::auth::domain::Identity;
use tracing::info;

use crate::errors::ApiError;
use crate::middleware::TOKEN_COOKIE;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Success {
    pub success: bool,
}

impl Success {
    fn ok() -> Json<Self> {
        Json(Self { success: true })
    }
}

/// Sign the posted identity and hand it back as a session cookie.
pub async fn issue_token(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(identity): Json<Identity>,
) -> Result<(CookieJar, Json<Success>), ApiError> {
    info!(user = ?identity, "user for token");
    let token = state.tokens.issue(identity)?;
    let cookie = Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None);
    Ok((jar.add(cookie), Success::ok()))
}

/// Expire the cookie. The token itself stays valid until `exp`.
pub async fn log_out(jar: CookieJar, body: Option<Json<Identity>>) -> (CookieJar, Json<Success>) {
    let user = body.map(|Json(u)| u);
    info!(user = ?user, "logging out");
    let mut removal = Cookie::build((TOKEN_COOKIE, "")).path("/").build();
    removal.make_removal();
    (jar.add(removal), Success::ok())
}
