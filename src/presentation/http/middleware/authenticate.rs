// src/presentation/http/middleware/authenticate.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

/// Resolve a bearer token into an `AuthenticatedUser` request extension.
///
/// Requests without an `Authorization` header continue anonymously; a header
/// carrying an invalid or expired token is rejected with 401 here.
pub async fn authenticate(mut req: Request<Body>, next: Next) -> Response {
    let Some(header) = req.headers().typed_get::<Authorization<Bearer>>() else {
        return next.run(req).await;
    };

    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    match state.services.token_manager().authenticate(header.token()).await {
        Ok(user) => {
            tracing::debug!(user = %user.id, tenant = %user.tenant, "request authenticated");
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(err) => {
            tracing::warn!(error = %err, "bearer token rejected");
            HttpError::from_error(err).into_response()
        }
    }
}
