//! Process-wide configuration for the relay server.
//!
//! Configuration is read from the environment once at startup and treated as
//! read-only for the life of the process. The upstream credential is optional
//! at load time: its absence is reported per request as a configuration
//! error, so the server still comes up (and answers liveness checks) on a
//! misconfigured host.

use std::env;

/// Environment variable holding the upstream credential.
pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Environment variable overriding the upstream messages endpoint.
pub const API_URL_VAR: &str = "ANTHROPIC_API_URL";

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_STATIC_DIR: &str = "static";

/// Configuration loading errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Immutable server configuration, loaded once at process start.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Upstream API key, if configured.
    pub api_key: Option<String>,
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Directory served for non-API routes.
    pub static_dir: String,
    /// Override for the upstream messages endpoint. `None` means the
    /// production endpoint; tests point this at a local mock.
    pub api_url: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            port: DEFAULT_PORT,
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            api_url: None,
        }
    }
}

impl RelayConfig {
    /// Reads configuration from the process environment.
    ///
    /// An empty `ANTHROPIC_API_KEY` counts as unset. A `PORT` that is set
    /// but unparsable is a hard error rather than a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: env::var(API_KEY_VAR).ok().filter(|k| !k.is_empty()),
            port: parse_port(env::var("PORT").ok())?,
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string()),
            api_url: env::var(API_URL_VAR).ok(),
        })
    }
}

fn parse_port(raw: Option<String>) -> Result<u16, ConfigError> {
    match raw {
        Some(p) => p.trim().parse().map_err(|_| ConfigError::InvalidPort(p)),
        None => Ok(DEFAULT_PORT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_deployment() {
        let config = RelayConfig::default();
        assert_eq!(config.port, 3001);
        assert_eq!(config.static_dir, "static");
        assert!(config.api_key.is_none());
        assert!(config.api_url.is_none());
    }

    #[test]
    fn port_parses_or_errors() {
        assert_eq!(parse_port(None).unwrap(), 3001);
        assert_eq!(parse_port(Some("8080".into())).unwrap(), 8080);
        assert!(matches!(
            parse_port(Some("not-a-port".into())),
            Err(ConfigError::InvalidPort(_))
        ));
    }
}
