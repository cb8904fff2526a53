//! HTTP client for the Anthropic Messages API.

use std::time::{Duration, Instant};

use relay_core::RelayError;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

/// Production messages endpoint.
pub const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Provider protocol version header value.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Fixed model every relayed prompt is sent to.
pub const MODEL: &str = "claude-3-5-haiku-20241022";

/// Fixed output token cap.
pub const MAX_TOKENS: u32 = 60;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct CompletionMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct CompletionRequest {
    model: &'static str,
    max_tokens: u32,
    messages: Vec<CompletionMessage>,
}

/// Client for the Anthropic Messages API.
///
/// Holds a connection pool with the 30-second request timeout baked in.
/// Cheap to share behind an `Arc`; the credential is passed per call so a
/// missing key can be reported without ever constructing a request.
pub struct AnthropicClient {
    client: Client,
    api_url: String,
}

impl AnthropicClient {
    /// Creates a client against the production endpoint.
    pub fn new() -> Result<Self, RelayError> {
        Self::with_api_url(ANTHROPIC_API_URL)
    }

    /// Creates a client against a custom endpoint (tests use a local mock).
    pub fn with_api_url(api_url: &str) -> Result<Self, RelayError> {
        Self::build(api_url, REQUEST_TIMEOUT)
    }

    fn build(api_url: &str, timeout: Duration) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RelayError::Internal(e.to_string()))?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
        })
    }

    /// Relays one prompt upstream and returns the response body verbatim.
    ///
    /// The prompt goes out as-is: no sanitization, no truncation. A
    /// non-success upstream status surfaces only its status code; the
    /// upstream error body is logged but never forwarded to the caller.
    pub async fn complete(&self, api_key: &str, prompt: &str) -> Result<Value, RelayError> {
        let start = Instant::now();

        let request = CompletionRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            messages: vec![CompletionMessage {
                role: "user",
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("content-type", "application/json")
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Anthropic API error {}: {}", status, body);
            return Err(RelayError::UpstreamStatus(status.as_u16()));
        }

        // The timeout can also fire mid-body, after a successful status line;
        // that is still a network failure, not a decode failure.
        let body: Value = response.json().await.map_err(|e| {
            if e.is_timeout() || e.is_connect() {
                RelayError::Network(e.to_string())
            } else {
                RelayError::Internal(e.to_string())
            }
        })?;

        info!("Upstream responded in {}ms", start.elapsed().as_millis());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn forwards_upstream_body_verbatim() {
        let server = MockServer::start().await;
        let upstream = json!({
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "content": [{"type": "text", "text": "Lead into gold"}],
            "usage": {"input_tokens": 12, "output_tokens": 9}
        });

        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("x-api-key", "test-key"))
            .and(header("anthropic-version", ANTHROPIC_VERSION))
            .and(body_partial_json(json!({
                "model": MODEL,
                "max_tokens": 60,
                "messages": [{"role": "user", "content": "combine fire and water"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(upstream.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let client = AnthropicClient::with_api_url(&server.uri()).unwrap();
        let body = client
            .complete("test-key", "combine fire and water")
            .await
            .unwrap();

        assert_eq!(body, upstream);
    }

    #[tokio::test]
    async fn surfaces_upstream_status_without_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"error": {"type": "authentication_error"}})),
            )
            .mount(&server)
            .await;

        let client = AnthropicClient::with_api_url(&server.uri()).unwrap();
        let err = client.complete("bad-key", "hello").await.unwrap_err();

        assert!(matches!(err, RelayError::UpstreamStatus(401)));
        assert_eq!(err.to_string(), "API request failed: 401");
    }

    #[tokio::test]
    async fn stalled_body_times_out_as_a_request_error() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;

            // Headers promise a body that never finishes.
            socket
                .write_all(
                    b"HTTP/1.1 200 OK\r\n\
                      content-type: application/json\r\n\
                      content-length: 100\r\n\r\n\
                      {\"id\"",
                )
                .await
                .unwrap();
            tokio::time::sleep(Duration::from_secs(2)).await;
        });

        let client =
            AnthropicClient::build(&format!("http://{addr}"), Duration::from_millis(200)).unwrap();
        let err = client.complete("test-key", "hello").await.unwrap_err();

        assert!(matches!(err, RelayError::Network(_)), "got: {err}");
        assert!(err.to_string().starts_with("Request error: "));
    }

    #[tokio::test]
    async fn connection_failure_is_a_network_error() {
        // Nothing listens on port 1; the connect fails immediately.
        let client = AnthropicClient::with_api_url("http://127.0.0.1:1").unwrap();
        let err = client.complete("test-key", "hello").await.unwrap_err();

        assert!(matches!(err, RelayError::Network(_)));
        assert!(err.to_string().starts_with("Request error: "));
    }
}
