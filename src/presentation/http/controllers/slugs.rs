// src/presentation/http/controllers/slugs.rs
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SlugPreviewParams {
    /// Text to turn into a slug.
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SlugPreviewResponse {
    pub text: String,
    pub slug: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/slugs/preview",
    params(SlugPreviewParams),
    responses(
        (status = 200, description = "Slug derived from the text.", body = SlugPreviewResponse)
    ),
    tag = "System"
)]
pub async fn preview(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SlugPreviewParams>,
) -> Json<SlugPreviewResponse> {
    let slug = state.services.preview_slug(&params.text);
    Json(SlugPreviewResponse {
        text: params.text,
        slug,
    })
}
