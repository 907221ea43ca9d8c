use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// `page` is the already rendered not-found document served as the body.
    #[error("Not found: {path}")]
    NotFound { path: String, page: String },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound { path, page } => {
                tracing::debug!("No route for {path}");
                (StatusCode::NOT_FOUND, Html(page)).into_response()
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {e:?}");
                internal_error()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "An internal server error occurred",
    )
        .into_response()
}
