//! Data transfer objects for the relay API.

use serde::{Deserialize, Serialize};

/// Liveness payload returned for GET on the API route.
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: &'static str,
    pub method: &'static str,
}

/// Inbound relay request.
///
/// Parsed leniently from the raw body so malformed JSON and a missing field
/// both land on the same validation failure.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}
