// src/presentation/http/extractors.rs
use crate::application::{dto::AuthenticatedUser, error::ApplicationError};
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

/// The user attached to the request by [`super::middleware::authenticate`].
///
/// Handlers taking this extractor reject anonymous requests with 401.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthenticatedUser);

/// Like [`CurrentUser`] but lets anonymous requests through.
#[derive(Debug, Clone)]
pub struct MaybeCurrentUser(pub Option<AuthenticatedUser>);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(Self)
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized("authentication required"))
            })
    }
}

impl<S> FromRequestParts<S> for MaybeCurrentUser
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<AuthenticatedUser>().cloned()))
    }
}
