// tests/support/helpers.rs
use super::mocks;
use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use std::sync::Arc;
use teamhub::{
    application::{
        commands::tenants::ProvisionTenantCommand,
        ports::{ClockPort, SlugGeneratorPort, TokenManagerPort},
        services::ApplicationServices,
    },
    infrastructure::{
        repositories::{
            InMemoryTeamMemberRepository, InMemoryTeamRepository, InMemoryTenantRepository,
        },
        util::UnicodeSlugGenerator,
    },
    presentation::http::{routes::build_router, state::HttpState},
};
use tower::util::ServiceExt as _;

/// Services over empty in-memory stores with the "Acme" and "Globex" tenants
/// provisioned.
pub async fn build_services(token_manager: Arc<TokenManagerPort>) -> Arc<ApplicationServices> {
    build_services_with_slugger(token_manager, Arc::new(UnicodeSlugGenerator)).await
}

pub async fn build_services_with_slugger(
    token_manager: Arc<TokenManagerPort>,
    slugger: Arc<SlugGeneratorPort>,
) -> Arc<ApplicationServices> {
    let clock: Arc<ClockPort> = Arc::new(mocks::DummyClock);
    let services = Arc::new(ApplicationServices::new(
        Arc::new(InMemoryTenantRepository::default()),
        Arc::new(InMemoryTeamRepository::default()),
        Arc::new(InMemoryTeamMemberRepository::default()),
        token_manager,
        clock,
        slugger,
    ));

    for name in ["Acme", "Globex"] {
        services
            .tenant_commands
            .provision_tenant(ProvisionTenantCommand { name: name.into() })
            .await
            .expect("seed tenant");
    }
    services
}

pub async fn build_test_state() -> HttpState {
    HttpState {
        services: build_services(Arc::new(mocks::DummyTokenManager)).await,
    }
}

pub async fn make_test_router() -> Router {
    build_router(build_test_state().await, &[])
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Build a request with an optional bearer token and JSON body.
pub fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    }
}

/// Send a request through a clone of the router and decode the JSON body
/// (`Value::Null` when the body is empty).
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.expect("router response");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

/// Create a team as the holder of `token` and return its slug.
pub async fn create_team(app: &Router, token: &str, name: &str) -> String {
    let (status, body) = send(
        app,
        request(
            Method::POST,
            "/api/v1/teams",
            Some(token),
            Some(serde_json::json!({ "name": name })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create team failed: {body}");
    body["slug"].as_str().expect("slug").to_string()
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
