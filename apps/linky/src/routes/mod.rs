pub mod health;
pub mod profile;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/:profile", get(profile::handle_profile_page))
        .fallback(profile::handle_not_found)
        .with_state(state)
}
