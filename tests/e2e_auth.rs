// tests/e2e_auth.rs
use axum::http::{Method, StatusCode};
use std::sync::Arc;
use teamhub::{
    application::{dto::TokenSubject, ports::security::TokenManager},
    domain::{
        tenant::TenantSlug,
        user::{TenantRole, UserId},
    },
    infrastructure::security::HmacTokenManager,
    presentation::http::{routes::build_router, state::HttpState},
};
use tower::util::ServiceExt as _;
use uuid::Uuid;

mod support;

use support::{
    ALICE_ID, ALICE_TOKEN, DummyClock, EXPIRED_TOKEN, assert_error_response, build_services,
    make_test_router, request, send,
};

const SECRET: &str = "integration-test-secret-0123456789abcdef";

#[tokio::test]
async fn me_requires_a_token() {
    let app = make_test_router().await;
    let resp = app
        .oneshot(request(Method::GET, "/api/v1/me", None, None))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn me_describes_the_authenticated_user() {
    let app = make_test_router().await;

    let (status, me) = send(&app, request(Method::GET, "/api/v1/me", Some(ALICE_TOKEN), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["id"], ALICE_ID.to_string());
    assert_eq!(me["username"], "alice");
    assert_eq!(me["tenant"], "acme");
    assert_eq!(me["role"], "member");
    assert_eq!(me["expires_in"], 3600);
    let caps: Vec<String> = me["capabilities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| format!("{}:{}", c["resource"].as_str().unwrap(), c["action"].as_str().unwrap()))
        .collect();
    assert_eq!(caps, ["teams:create"]);
}

#[tokio::test]
async fn rejected_token_fails_even_on_public_routes() {
    let app = make_test_router().await;

    for token in [EXPIRED_TOKEN, "garbage"] {
        let resp = app
            .clone()
            .oneshot(request(Method::GET, "/api/v1/tenants", Some(token), None))
            .await
            .unwrap();
        assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
    }
}

#[tokio::test]
async fn hmac_tokens_authenticate_through_the_router() {
    let manager = Arc::new(
        HmacTokenManager::new(SECRET, std::time::Duration::from_secs(600), Arc::new(DummyClock))
            .expect("token manager"),
    );
    let services = build_services(manager.clone()).await;
    let app = build_router(HttpState { services }, &[]);

    let user = Uuid::new_v4();
    let issued = manager
        .issue(TokenSubject {
            user_id: UserId::new(user).unwrap(),
            username: "carol".into(),
            tenant: TenantSlug::new("globex").unwrap(),
            role: TenantRole::Admin,
        })
        .await
        .expect("issue");
    assert_eq!(issued.expires_in, 600);

    let (status, me) = send(
        &app,
        request(Method::GET, "/api/v1/me", Some(&issued.token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["id"], user.to_string());
    assert_eq!(me["tenant"], "globex");
    assert_eq!(me["role"], "admin");

    let (status, team) = send(
        &app,
        request(
            Method::POST,
            "/api/v1/teams",
            Some(&issued.token),
            Some(serde_json::json!({ "name": "Research" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(team["tenant"], "globex");

    let mut tampered = issued.token.clone();
    tampered.push('x');
    let resp = app
        .clone()
        .oneshot(request(Method::GET, "/api/v1/me", Some(&tampered), None))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}
