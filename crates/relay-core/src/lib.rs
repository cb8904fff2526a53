//! Shared error definitions for the prompt relay.
//!
//! Every failure surfaced to a caller maps to exactly one [`RelayError`]
//! variant, and the display string of each variant is the exact `error`
//! field the caller receives. The HTTP status mapping lives in the server
//! crate; this crate only fixes the taxonomy and the wording.
//!
//! # Example
//!
//! ```rust
//! use relay_core::RelayError;
//!
//! let err = RelayError::UpstreamStatus(401);
//! assert_eq!(err.to_string(), "API request failed: 401");
//! ```

use thiserror::Error;

/// Errors that can occur while relaying a prompt upstream.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Request body was not JSON, or carried no usable `prompt` field.
    #[error("Prompt is required")]
    InvalidPrompt,

    /// The upstream credential is missing from configuration.
    #[error("API key not configured")]
    MissingApiKey,

    /// The upstream provider answered with a non-success HTTP status.
    #[error("API request failed: {0}")]
    UpstreamStatus(u16),

    /// The outbound call itself failed: connect, timeout, TLS, DNS.
    #[error("Request error: {0}")]
    Network(String),

    /// Anything else that went wrong during handling.
    #[error("Server error: {0}")]
    Internal(String),
}

impl RelayError {
    /// Returns true when the caller can fix the request and retry.
    pub fn is_caller_fault(&self) -> bool {
        matches!(self, RelayError::InvalidPrompt)
    }
}
