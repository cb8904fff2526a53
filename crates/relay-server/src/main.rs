//! Relay server entry point and Axum setup.
//!
//! Loads `.env`, initializes logging, and serves the relay API plus the
//! static front-end on the configured port.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, Response};
use relay_config::RelayConfig;
use relay_server::{build_router, ServerState};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let config = RelayConfig::from_env()?;
    if config.api_key.is_none() {
        warn!(
            "{} is not set; POST requests will fail until it is configured",
            relay_config::API_KEY_VAR
        );
    }

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let addr = format!("0.0.0.0:{}", config.port);
    let state = Arc::new(ServerState::from_config(config)?);
    let app = build_router(state).layer(trace_layer);

    info!("Starting relay server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
