// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::me,
        crate::presentation::http::controllers::slugs::preview,
        crate::presentation::http::controllers::tenants::list_tenants,
        crate::presentation::http::controllers::tenants::get_theme,
        crate::presentation::http::controllers::tenants::update_theme,
        crate::presentation::http::controllers::teams::list_teams,
        crate::presentation::http::controllers::teams::create_team,
        crate::presentation::http::controllers::teams::get_team,
        crate::presentation::http::controllers::teams::list_members,
        crate::presentation::http::controllers::teams::add_member,
        crate::presentation::http::controllers::teams::remove_member,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::slugs::SlugPreviewResponse,
            crate::presentation::http::controllers::tenants::TenantListResponse,
            crate::presentation::http::controllers::teams::CreateTeamRequest,
            crate::presentation::http::controllers::teams::TeamListResponse,
            crate::presentation::http::controllers::teams::MemberListResponse,
            crate::application::dto::FieldError,
            crate::application::dto::AddMemberRequest,
            crate::application::dto::UpdateThemeRequest,
            crate::application::dto::CurrentUserDto,
            crate::application::dto::CapabilityView,
            crate::application::dto::TeamDto,
            crate::application::dto::TeamMemberDto,
            crate::application::dto::TenantDto,
            crate::application::dto::TenantThemeDto,
            crate::domain::team::MemberRole,
            crate::domain::tenant::ThemeMode,
            crate::domain::user::TenantRole
        )
    ),
    tags(
        (name = "Auth", description = "Caller identity"),
        (name = "Teams", description = "Teams and membership"),
        (name = "Tenants", description = "Tenants and their themes"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Teamhub API",
        description = "Multi-tenant teams backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("teamhub-v1".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/openapi.json", get(serve_openapi))
}

/// Write the OpenAPI document to `OPENAPI_SNAPSHOT_PATH` (default
/// [`DEFAULT_SNAPSHOT_PATH`]) and return the path written.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/v1/me",
            "/api/v1/slugs/preview",
            "/api/v1/tenants",
            "/api/v1/tenants/{slug}/theme",
            "/api/v1/tenant/theme",
            "/api/v1/teams",
            "/api/v1/teams/{slug}",
            "/api/v1/teams/{slug}/members",
            "/api/v1/teams/{slug}/members/{user_id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearerAuth"));
    }
}
