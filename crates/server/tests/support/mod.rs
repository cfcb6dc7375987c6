#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use models::service::Service;
use server::{routes, state::AppState};
use service::auth::TokenService;
use service::bookings::repository::memory::InMemoryBookingRepository;
use service::catalog::repository::memory::InMemoryServiceRepository;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

pub const SECRET: &str = "test-secret";

pub struct TestApp {
    pub router: Router,
    pub bookings: Arc<InMemoryBookingRepository>,
}

pub fn app_with_services(services: Vec<Service>) -> TestApp {
    app_with(services, CorsLayer::very_permissive())
}

pub fn app_with_cors(cors: CorsLayer) -> TestApp {
    app_with(Vec::new(), cors)
}

fn app_with(services: Vec<Service>, cors: CorsLayer) -> TestApp {
    let bookings = Arc::new(InMemoryBookingRepository::default());
    let state = AppState::new(
        TokenService::new(SECRET, 3600),
        Arc::new(InMemoryServiceRepository::with_services(services)),
        bookings.clone(),
    );
    let router = routes::build_router(state, cors);
    TestApp { router, bookings }
}

pub fn app() -> TestApp {
    app_with_services(Vec::new())
}

pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn json(&self) -> anyhow::Result<serde_json::Value> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn set_cookie(&self) -> Option<String> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    }
}

pub async fn send(app: &TestApp, req: Request<Body>) -> anyhow::Result<Reply> {
    let resp = app.router.clone().oneshot(req).await?;
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    Ok(Reply { status, headers, body: body.to_vec() })
}

pub fn get(uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder().method("GET").uri(uri).body(Body::empty())?)
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())?)
}

pub fn json(method: &str, uri: &str, body: serde_json::Value) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body)?))?)
}

pub fn delete(uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder().method("DELETE").uri(uri).body(Body::empty())?)
}

/// `token=<jwt>` cookie header for an identity with `email`.
pub fn cookie_for(email: &str) -> anyhow::Result<String> {
    let token = TokenService::new(SECRET, 3600)
        .issue(service::auth::domain::Identity::with_email(email))?;
    Ok(format!("token={token}"))
}
