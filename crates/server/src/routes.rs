use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::middleware::{log_request, require_token};
use crate::state::AppState;

pub mod auth;
pub mod bookings;
pub mod services;

pub async fn root() -> &'static str {
    "Hotel is running"
}

/// Build the full application router.
///
/// The request logger sits on `POST /jwt` and `GET /bookings`; the token
/// guard only on `GET /bookings`.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let issue_token = post(auth::issue_token).route_layer(middleware::from_fn(log_request));

    let bookings_root = get(bookings::list)
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token))
        .route_layer(middleware::from_fn(log_request))
        .post(bookings::create);

    Router::new()
        .route("/", get(root))
        .route("/jwt", issue_token)
        .route("/logOut", post(auth::log_out))
        .route("/services", get(services::list))
        .route("/services/:id", get(services::get))
        .route("/bookings", bookings_root)
        .route(
            "/bookings/:id",
            get(bookings::get).put(bookings::update).delete(bookings::delete),
        )
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
