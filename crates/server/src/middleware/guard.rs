use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::warn;

use crate::errors::{ApiError, UNAUTHORIZED_MESSAGE};
use crate::state::AppState;

pub const TOKEN_COOKIE: &str = "token";

/// Require a valid `token` cookie and expose its `Identity` as a request extension.
///
/// Missing cookie: 401. Invalid or expired token: the unauthorized body with a
/// 200 status.
pub async fn require_token(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let token = match jar.get(TOKEN_COOKIE).map(|c| c.value().to_owned()) {
        Some(t) if !t.is_empty() => t,
        _ => {
            warn!(path = %req.uri().path(), "missing token cookie");
            return ApiError::Unauthorized.into_response();
        }
    };

    match state.tokens.verify(&token) {
        Ok(identity) => {
            req.extensions_mut().insert(identity);
            next.run(req).await
        }
        Err(e) => {
            warn!(path = %req.uri().path(), err = %e, "token validation failed");
            Json(serde_json::json!({"message": UNAUTHORIZED_MESSAGE})).into_response()
        }
    }
}
