//! Application state and HTTP router construction.
//!
//! Used by `main` and by the router integration tests to build the Axum app.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::catalog::CatalogStore;
use crate::config::Config;
use crate::graphql::{BookshelfSchema, build_schema};
use crate::services::{BookBroker, GraphqlService};

/// Shared state for HTTP handlers (GraphQL, health routes).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<CatalogStore>,
    pub schema: BookshelfSchema,
}

impl AppState {
    /// Build the schema over `catalog` and `broker` and wrap it for the router
    pub fn new(config: Arc<Config>, catalog: Arc<CatalogStore>, broker: Arc<BookBroker>) -> Self {
        let schema = build_schema(catalog.clone(), broker);
        Self {
            config,
            catalog,
            schema,
        }
    }
}

/// Build the full Axum router: health routes, /graphql, /graphql/ws, and layers.
/// Returns Router<()> (state fully applied) for use with axum::serve.
pub fn build_app(state: AppState) -> Router<()> {
    Router::new()
        .merge(api::health::router())
        .merge(GraphqlService::router())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
