use std::sync::Arc;

use crate::config::Config;
use crate::models::profile::Profile;
use crate::render::PageRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<PageRenderer>,
    /// Content shown on the index page. Always `Profile::owner()` outside tests.
    pub profile: &'static Profile,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        Ok(AppState {
            renderer: Arc::new(PageRenderer::new()?),
            profile: Profile::owner(),
            config,
        })
    }
}
