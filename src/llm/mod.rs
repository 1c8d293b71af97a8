//! LLM Provider Clients and Abstractions
//!
//! The support agent treats the conversational model as a black box behind
//! [`LLMClient`]: one request carries the system prompt, the tool schemas and
//! the history; one response carries content blocks and a stop reason.
//!
//! # Example
//!
//! ```ignore
//! use acme_support::llm::{AnthropicClient, ChatRequest, LLMClient};
//!
//! let client = AnthropicClient::new(api_key, "claude-3-5-sonnet-20241022".to_string());
//! let response = client.chat(&request).await?;
//! if response.wants_tool() {
//!     // run the requested tool and send the result back
//! }
//! ```

/// Anthropic Messages API client.
pub mod anthropic;
/// Core LLM client trait and request/response types.
pub mod client;

pub use anthropic::AnthropicClient;
pub use client::{ChatRequest, LLMClient, LLMResponse, ModelParams, StopReason, TokenUsage};
