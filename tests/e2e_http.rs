// tests/e2e_http.rs
use axum::http::{Method, Request, StatusCode, header};
use tower::util::ServiceExt as _;

mod support;

use support::{make_test_router, request, send};

#[tokio::test]
async fn health_reports_ok() {
    let app = make_test_router().await;
    let (status, body) = send(&app, request(Method::GET, "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = make_test_router().await;
    let (status, doc) = send(&app, request(Method::GET, "/openapi.json", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/v1/teams/{slug}/members"].is_object());
    assert!(doc["components"]["securitySchemes"]["bearerAuth"].is_object());
}

#[tokio::test]
async fn slug_preview_is_public() {
    let app = make_test_router().await;

    let (status, body) = send(
        &app,
        request(
            Method::GET,
            "/api/v1/slugs/preview?text=Caf%C3%A9%20%C3%A0%20la%20Cr%C3%A8me",
            None,
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "Café à la Crème");
    assert_eq!(body["slug"], "cafe-a-la-creme");
}

#[tokio::test]
async fn slug_preview_keeps_edge_hyphens() {
    let app = make_test_router().await;
    let (_, body) = send(
        &app,
        request(Method::GET, "/api/v1/slugs/preview?text=%20!hello%20world!%20", None, None),
    )
    .await;
    // Trimmed before whitespace folding; the "!" characters are then dropped.
    assert_eq!(body["slug"], "hello-world");

    let (_, body) = send(
        &app,
        request(Method::GET, "/api/v1/slugs/preview?text=-edge-", None, None),
    )
    .await;
    assert_eq!(body["slug"], "-edge-");
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
    let app = make_test_router().await;
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/teams")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(axum::body::Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = make_test_router().await;
    let resp = app
        .oneshot(request(Method::GET, "/api/v1/nope", None, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
