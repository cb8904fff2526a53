//! HTTP server wiring for the prompt relay.
//!
//! The router is built by [`build_router`] from an immutable [`ServerState`],
//! so the long-lived server binary, integration tests, and any single-shot
//! hosting adapter all share the same handler wiring.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod services;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use relay_config::RelayConfig;
use relay_core::RelayError;
use relay_llm::AnthropicClient;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Shared server state accessible from all handlers.
///
/// Read-only after construction; handlers never mutate it, so no
/// synchronization is needed beyond the `Arc`.
pub struct ServerState {
    pub config: RelayConfig,
    pub client: AnthropicClient,
}

impl ServerState {
    /// Builds state from configuration, honoring a custom upstream URL.
    pub fn from_config(config: RelayConfig) -> Result<Self, RelayError> {
        let client = match config.api_url.as_deref() {
            Some(url) => AnthropicClient::with_api_url(url)?,
            None => AnthropicClient::new()?,
        };

        Ok(Self { config, client })
    }
}

/// Builds the application router: the relay API on `/api/generate`, static
/// files for everything else.
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route(
            "/api/generate",
            get(handlers::generate::liveness).post(handlers::generate::generate),
        )
        .fallback_service(static_files)
        .layer(cors)
        .with_state(state)
}
