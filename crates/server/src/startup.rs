use axum::http::{header, HeaderValue, Method};
use axum::Router;
use common::shutdown::shutdown_signal;
use configs::{AppConfig, CorsConfig};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::AppState;

/// Credentialed CORS for the single configured origin.
pub fn build_cors(cfg: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let origin = cfg.allowed_origin.trim();
    if origin == "*" {
        // credentials forbid a literal wildcard; mirror the caller instead
        warn!("CORS open to every origin");
        return Ok(CorsLayer::very_permissive());
    }
    let value = HeaderValue::from_str(origin)
        .map_err(|e| anyhow::anyhow!("invalid CORS origin {origin:?}: {e}"))?;
    Ok(CorsLayer::new()
        .allow_origin(value)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Connect the store and build the application router.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let db = models::db::connect(&cfg.database.uri, &cfg.database.name).await?;
    // the driver reconnects on demand, so an unreachable store is not fatal here
    models::db::ping(&db).await;

    let state = AppState::from_database(&db, &cfg.auth);
    Ok(routes::build_router(state, build_cors(&cfg.cors)?))
}

/// Public entry: build the app and serve until a shutdown signal.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Hotel room is running");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
