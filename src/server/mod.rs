//! HTTP API for identity card uploads.
//!
//! Exposes the upload endpoint plus card retrieval, listing, health and a
//! small HTML documentation page.

mod docs;
mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::services::CardService;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CardService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub async fn new(settings: Arc<Settings>) -> anyhow::Result<Self> {
        let ctx = settings.create_db_context()?;
        ctx.init_schema().await?;

        let service = CardService::new(ctx.cards(), Arc::clone(&settings));
        Ok(Self {
            service: Arc::new(service),
            settings,
        })
    }
}

/// Start the web server.
pub async fn serve(settings: Arc<Settings>, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings).await?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
