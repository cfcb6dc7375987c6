use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use configs::CorsConfig;
use server::startup::build_cors;

mod support;
use support::*;

const FRONTEND: &str = "https://elated-zoo.surge.sh";

fn preflight(origin: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method("OPTIONS")
        .uri("/bookings")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())?)
}

fn header_str<'a>(reply: &'a Reply, name: header::HeaderName) -> Option<&'a str> {
    reply.headers.get(name).and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn configured_origin_gets_credentialed_preflight() -> anyhow::Result<()> {
    let app = app_with_cors(build_cors(&CorsConfig::default())?);

    let resp = send(&app, preflight(FRONTEND)?).await?;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(header_str(&resp, header::ACCESS_CONTROL_ALLOW_ORIGIN), Some(FRONTEND));
    assert_eq!(header_str(&resp, header::ACCESS_CONTROL_ALLOW_CREDENTIALS), Some("true"));
    Ok(())
}

#[tokio::test]
async fn other_origins_are_not_allowed() -> anyhow::Result<()> {
    let app = app_with_cors(build_cors(&CorsConfig::default())?);

    let resp = send(&app, preflight("https://evil.example")?).await?;
    assert_eq!(header_str(&resp, header::ACCESS_CONTROL_ALLOW_ORIGIN), None);
    Ok(())
}

#[tokio::test]
async fn wildcard_mirrors_the_caller() -> anyhow::Result<()> {
    let app = app_with_cors(build_cors(&CorsConfig { allowed_origin: "*".into() })?);

    let resp = send(&app, preflight("http://localhost:5173")?).await?;
    assert_eq!(header_str(&resp, header::ACCESS_CONTROL_ALLOW_ORIGIN), Some("http://localhost:5173"));
    assert_eq!(header_str(&resp, header::ACCESS_CONTROL_ALLOW_CREDENTIALS), Some("true"));
    Ok(())
}

#[test]
fn unusable_origin_is_an_error() {
    assert!(build_cors(&CorsConfig { allowed_origin: "bad\norigin".into() }).is_err());
}
