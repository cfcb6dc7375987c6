use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

/// Record method and path, then always continue.
pub async fn log_request(req: Request, next: Next) -> Response {
    info!(method = %req.method(), path = %req.uri().path(), "log: info");
    next.run(req).await
}
