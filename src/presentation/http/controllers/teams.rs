// src/presentation/http/controllers/teams.rs
use crate::application::{
    commands::teams::{AddMemberCommand, CreateTeamCommand, RemoveMemberCommand},
    dto::{AddMemberRequest, TeamDto, TeamMemberDto},
    error::ApplicationError,
    queries::teams::{GetTeamQuery, ListMembersQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::CurrentUser;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateTeamRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct TeamListResponse {
    pub items: Vec<TeamDto>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MemberListResponse {
    pub items: Vec<TeamMemberDto>,
}

#[utoipa::path(
    get,
    path = "/api/v1/teams",
    responses(
        (status = 200, description = "Teams of the caller's tenant.", body = TeamListResponse),
        (status = 401, description = "Authentication required.", body = ErrorResponse)
    ),
    tag = "Teams"
)]
pub async fn list_teams(
    Extension(state): Extension<HttpState>,
    CurrentUser(user): CurrentUser,
) -> HttpResult<Json<TeamListResponse>> {
    let items = state.services.team_queries.list_teams(&user).await.into_http()?;
    Ok(Json(TeamListResponse { items }))
}

#[utoipa::path(
    post,
    path = "/api/v1/teams",
    request_body = CreateTeamRequest,
    responses(
        (status = 201, description = "Team created; the caller is its owner.", body = TeamDto),
        (status = 400, description = "Invalid team name.", body = ErrorResponse),
        (status = 401, description = "Authentication required.", body = ErrorResponse),
        (status = 403, description = "Missing teams:create.", body = ErrorResponse)
    ),
    tag = "Teams"
)]
pub async fn create_team(
    Extension(state): Extension<HttpState>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<CreateTeamRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<TeamDto>)> {
    let Json(payload) = payload?;
    let command = CreateTeamCommand { name: payload.name };

    let team = state
        .services
        .team_commands
        .create_team(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(team)))
}

#[utoipa::path(
    get,
    path = "/api/v1/teams/{slug}",
    params(("slug" = String, Path, description = "Team slug")),
    responses(
        (status = 200, description = "Team details.", body = TeamDto),
        (status = 404, description = "No such team in the caller's tenant.", body = ErrorResponse)
    ),
    tag = "Teams"
)]
pub async fn get_team(
    Extension(state): Extension<HttpState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
) -> HttpResult<Json<TeamDto>> {
    state
        .services
        .team_queries
        .get_team(&user, GetTeamQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/teams/{slug}/members",
    params(("slug" = String, Path, description = "Team slug")),
    responses(
        (status = 200, description = "Members in join order.", body = MemberListResponse),
        (status = 404, description = "No such team in the caller's tenant.", body = ErrorResponse)
    ),
    tag = "Teams"
)]
pub async fn list_members(
    Extension(state): Extension<HttpState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
) -> HttpResult<Json<MemberListResponse>> {
    let items = state
        .services
        .team_queries
        .list_members(&user, ListMembersQuery { team_slug: slug })
        .await
        .into_http()?;
    Ok(Json(MemberListResponse { items }))
}

#[utoipa::path(
    post,
    path = "/api/v1/teams/{slug}/members",
    params(("slug" = String, Path, description = "Team slug")),
    request_body = AddMemberRequest,
    responses(
        (status = 201, description = "Member added.", body = TeamMemberDto),
        (status = 400, description = "Field-level validation errors.", body = ErrorResponse),
        (status = 403, description = "Caller cannot manage this team.", body = ErrorResponse),
        (status = 404, description = "No such team in the caller's tenant.", body = ErrorResponse),
        (status = 409, description = "User is already a member.", body = ErrorResponse)
    ),
    tag = "Teams"
)]
pub async fn add_member(
    Extension(state): Extension<HttpState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
    payload: Result<Json<AddMemberRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<TeamMemberDto>)> {
    let Json(payload) = payload?;
    let command = AddMemberCommand::try_new(slug, &payload)
        .map_err(ApplicationError::InvalidInput)
        .into_http()?;

    let member = state
        .services
        .team_commands
        .add_member(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(member)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/teams/{slug}/members/{user_id}",
    params(
        ("slug" = String, Path, description = "Team slug"),
        ("user_id" = String, Path, description = "UUID of the member to remove")
    ),
    responses(
        (status = 200, description = "The removed membership.", body = TeamMemberDto),
        (status = 403, description = "Caller cannot manage this team.", body = ErrorResponse),
        (status = 404, description = "Team or member not found.", body = ErrorResponse),
        (status = 409, description = "Would remove the last owner.", body = ErrorResponse)
    ),
    tag = "Teams"
)]
pub async fn remove_member(
    Extension(state): Extension<HttpState>,
    CurrentUser(user): CurrentUser,
    Path((slug, user_id)): Path<(String, String)>,
) -> HttpResult<Json<TeamMemberDto>> {
    let command = RemoveMemberCommand {
        team_slug: slug,
        user_id,
    };

    state
        .services
        .team_commands
        .remove_member(&user, command)
        .await
        .into_http()
        .map(Json)
}
