use axum::{
    extract::State,
    http::{header, Uri},
    response::{Html, IntoResponse},
};

use crate::errors::AppError;
use crate::render::SITE_CSS;
use crate::state::AppState;

/// GET /
pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = state.renderer.render_index(state.profile)?;
    Ok(Html(html))
}

/// GET /static/site.css
pub async fn stylesheet_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (
                header::CACHE_CONTROL,
                state.config.environment.static_cache_control(),
            ),
        ],
        SITE_CSS,
    )
}

/// Fallback for every unmatched route.
pub async fn not_found_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    let path = uri.path().to_string();
    let page = state.renderer.render_not_found(state.profile, &path)?;
    Err(AppError::NotFound { path, page })
}
