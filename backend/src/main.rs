//! Bookshelf server entry point.

use std::sync::Arc;

use bookshelf::catalog::CatalogStore;
use bookshelf::config::Config;
use bookshelf::services::{BookBroker, http_server, init_tracing};
use bookshelf::{AppState, build_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first so the log format is known before tracing starts
    dotenvy::dotenv().ok();
    let config = Arc::new(Config::from_env()?);

    init_tracing(config.log_format);
    tracing::info!("Starting Bookshelf");
    tracing::info!(?config, "Configuration loaded");

    let catalog = Arc::new(CatalogStore::seeded());
    tracing::info!(
        books = catalog.book_count(),
        authors = catalog.author_count(),
        "Catalog seeded"
    );

    let broker = BookBroker::new(config.broadcast_capacity);
    let state = AppState::new(config.clone(), catalog, broker);
    tracing::info!("GraphQL schema built");

    http_server::serve(&config, build_app(state)).await
}
