//! Liveness and prompt relay handlers for `/api/generate`.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::Value;
use tracing::error;

use crate::dto::LivenessResponse;
use crate::error::ApiError;
use crate::services::relay::relay_prompt;
use crate::ServerState;

/// GET liveness check; succeeds regardless of configuration.
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "API is working",
        method: "GET",
    })
}

/// POST relay endpoint: forwards the prompt upstream and returns the
/// upstream body unmodified.
///
/// Takes the body as raw bytes rather than a typed extractor so validation
/// failures (malformed JSON included) map to the relay's own 400 response.
pub async fn generate(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    match relay_prompt(&state, &body).await {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            if !err.is_caller_fault() {
                error!("Relay failed: {}", err);
            }
            Err(err.into())
        }
    }
}
