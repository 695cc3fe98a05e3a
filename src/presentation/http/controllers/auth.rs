// src/presentation/http/controllers/auth.rs
use crate::application::dto::CurrentUserDto;
use crate::presentation::http::error::ErrorResponse;
use crate::presentation::http::extractors::CurrentUser;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/me",
    responses(
        (status = 200, description = "The authenticated caller.", body = CurrentUserDto),
        (status = 401, description = "Missing or invalid bearer token.", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn me(
    Extension(state): Extension<HttpState>,
    CurrentUser(user): CurrentUser,
) -> Json<CurrentUserDto> {
    let now = state.services.clock().now();
    Json(CurrentUserDto::from_user(&user, now))
}
