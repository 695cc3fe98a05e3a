// src/presentation/http/controllers/tenants.rs
use crate::application::{
    commands::tenants::UpdateThemeCommand,
    dto::{TenantDto, TenantThemeDto, UpdateThemeRequest},
    error::ApplicationError,
    queries::tenants::GetTenantThemeQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{CurrentUser, MaybeCurrentUser};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct TenantListResponse {
    pub items: Vec<TenantDto>,
    /// Slug of the caller's tenant when the request is authenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/tenants",
    responses(
        (status = 200, description = "Known tenants ordered by slug.", body = TenantListResponse)
    ),
    tag = "Tenants"
)]
pub async fn list_tenants(
    Extension(state): Extension<HttpState>,
    MaybeCurrentUser(user): MaybeCurrentUser,
) -> HttpResult<Json<TenantListResponse>> {
    let items = state.services.tenant_queries.list_tenants().await.into_http()?;
    Ok(Json(TenantListResponse {
        items,
        current: user.map(|u| u.tenant.to_string()),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/tenants/{slug}/theme",
    params(("slug" = String, Path, description = "Tenant slug")),
    responses(
        (status = 200, description = "Theme the client should apply.", body = TenantThemeDto),
        (status = 404, description = "Unknown tenant.", body = ErrorResponse)
    ),
    tag = "Tenants"
)]
pub async fn get_theme(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<TenantThemeDto>> {
    state
        .services
        .tenant_queries
        .get_theme(GetTenantThemeQuery { tenant_slug: slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/tenant/theme",
    request_body = UpdateThemeRequest,
    responses(
        (status = 200, description = "Updated theme of the caller's tenant.", body = TenantThemeDto),
        (status = 400, description = "Field-level validation errors.", body = ErrorResponse),
        (status = 403, description = "Missing tenant:update_theme.", body = ErrorResponse)
    ),
    tag = "Tenants"
)]
pub async fn update_theme(
    Extension(state): Extension<HttpState>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<UpdateThemeRequest>, JsonRejection>,
) -> HttpResult<Json<TenantThemeDto>> {
    let Json(payload) = payload?;
    let command = UpdateThemeCommand::try_new(&payload)
        .map_err(ApplicationError::InvalidInput)
        .into_http()?;

    state
        .services
        .tenant_commands
        .update_theme(&user, command)
        .await
        .into_http()
        .map(Json)
}
