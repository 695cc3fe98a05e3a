// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, slugs, teams, tenants},
    middleware::authenticate,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    middleware,
    routing::{delete, get, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the application router. An empty `allowed_origins` or a `*` entry
/// allows any origin.
pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let wildcard = allowed_origins.iter().any(|origin| origin == "*");
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();
    let allow_origin = if wildcard || origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/me", get(auth::me))
        .route("/api/v1/slugs/preview", get(slugs::preview))
        .route("/api/v1/tenants", get(tenants::list_tenants))
        .route("/api/v1/tenants/{slug}/theme", get(tenants::get_theme))
        .route("/api/v1/tenant/theme", put(tenants::update_theme))
        .route(
            "/api/v1/teams",
            get(teams::list_teams).post(teams::create_team),
        )
        .route("/api/v1/teams/{slug}", get(teams::get_team))
        .route(
            "/api/v1/teams/{slug}/members",
            get(teams::list_members).post(teams::add_member),
        )
        .route(
            "/api/v1/teams/{slug}/members/{user_id}",
            delete(teams::remove_member),
        )
        .layer(middleware::from_fn(authenticate))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
