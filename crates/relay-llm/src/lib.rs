//! Anthropic Messages API client for the prompt relay.
//!
//! One client, one operation: send a single user prompt upstream with the
//! fixed model configuration and hand back whatever JSON the provider
//! returns, untouched.
//!
//! ```rust,ignore
//! use relay_llm::AnthropicClient;
//!
//! let client = AnthropicClient::new()?;
//! let body = client.complete(&api_key, "Tell me a haiku").await?;
//! ```

mod anthropic;

pub use anthropic::{AnthropicClient, ANTHROPIC_API_URL, ANTHROPIC_VERSION, MAX_TOKENS, MODEL};
