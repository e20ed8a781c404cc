//! Router configuration for the web server.

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    // Leave headroom above the configured file limit for multipart framing,
    // so oversized files are reported as 413 by validation rather than
    // rejected mid-stream by the body limit.
    let body_limit = state.settings.max_file_size as usize + 64 * 1024;

    Router::new()
        .route("/", get(handlers::root_info))
        .route("/api/docs", get(handlers::docs_page))
        .route(
            "/api/v1/identity-cards/upload",
            post(handlers::upload_card).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/api/v1/identity-cards", get(handlers::list_cards))
        .route("/api/v1/identity-cards/:card_id", get(handlers::get_card))
        .route(
            "/api/v1/identity-cards/health/check",
            get(handlers::health_check),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
