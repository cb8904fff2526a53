//! Core relay logic, independent of the hosting layer.
//!
//! [`relay_prompt`] is the whole request pipeline as a plain async function,
//! so the Axum handler and any single-invocation adapter wrap it without
//! duplicating logic: validate, check the credential, call upstream.

use relay_core::RelayError;
use serde_json::Value;
use tracing::info;

use crate::dto::GenerateRequest;
use crate::ServerState;

const PREVIEW_CHARS: usize = 50;

/// Shortens a prompt for logging, cutting on a character boundary.
fn preview(prompt: &str) -> String {
    match prompt.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => format!("{}...", &prompt[..idx]),
        None => prompt.to_string(),
    }
}

/// Parses the raw request body and extracts a non-empty prompt.
pub fn validate_prompt(body: &[u8]) -> Result<String, RelayError> {
    let request: GenerateRequest =
        serde_json::from_slice(body).map_err(|_| RelayError::InvalidPrompt)?;

    match request.prompt {
        Some(prompt) if !prompt.is_empty() => Ok(prompt),
        _ => Err(RelayError::InvalidPrompt),
    }
}

/// Runs one relay request end to end, short-circuiting at the first failure.
///
/// The credential check happens before any request is built, so a
/// misconfigured deployment never produces outbound traffic.
pub async fn relay_prompt(state: &ServerState, body: &[u8]) -> Result<Value, RelayError> {
    let prompt = validate_prompt(body)?;

    info!("Received prompt: {}", preview(&prompt));

    let api_key = state
        .config
        .api_key
        .as_deref()
        .ok_or(RelayError::MissingApiKey)?;

    state.client.complete(api_key, &prompt).await
}
