//! idscan - identity card OCR upload API.
//!
//! Accepts identity card PDFs over HTTP, extracts text with Tesseract OCR
//! (rendering pages via Poppler), parses structured fields out of the text,
//! and persists the results for later retrieval.

mod cli;
mod config;
mod extract;
mod models;
mod ocr;
mod repository;
mod schema;
mod server;
mod services;
mod storage;
mod utils;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if cli::is_verbose() {
        "idscan=info"
    } else {
        "idscan=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    cli::run().await
}
