//! Service metadata endpoints: root info, health check, docs page.

use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::server::docs;

/// GET / - service description and a pointer to the docs.
pub async fn root_info() -> Response {
    Json(json!({
        "message": "Identity Card OCR API",
        "version": env!("CARGO_PKG_VERSION"),
        "docs": "/api/docs",
    }))
    .into_response()
}

/// GET /api/v1/identity-cards/health/check
pub async fn health_check() -> Response {
    Json(json!({
        "status": "healthy",
        "message": "Identity Card OCR API is running",
    }))
    .into_response()
}

/// GET /api/docs - static HTML documentation page.
pub async fn docs_page() -> Response {
    Html(docs::render()).into_response()
}
