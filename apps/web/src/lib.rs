//! Personal portfolio site: one server-rendered page plus health and static routes.

pub mod config;
pub mod errors;
pub mod models;
pub mod render;
pub mod routes;
pub mod state;

pub use config::{Config, Environment};
pub use routes::build_router;
pub use state::AppState;
