pub mod health;
pub mod pages;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index_handler))
        .route("/health", get(health::health_handler))
        .route("/static/site.css", get(pages::stylesheet_handler))
        .fallback(pages::not_found_handler)
        .with_state(state)
}
