//! # Acme Co Support
//!
//! A terminal customer-support assistant for the Acme Co online store. User
//! messages go to a hosted model, which can call four tools against the
//! customer and order data: look up a customer, look up an order, list a
//! customer's orders, and cancel an order that is still processing.
//!
//! ## Overview
//!
//! The crate can be used in two ways:
//!
//! 1. **As a console** - Run the `acme-support` binary
//! 2. **As a library** - Drive [`SupportAgent`] with any [`LLMClient`]
//!
//! ### Basic Example
//!
//! ```rust,ignore
//! use acme_support::{AnthropicClient, SupportAgent, SupportStore, ToolRegistry};
//!
//! #[tokio::main]
//! async fn main() -> acme_support::Result<()> {
//!     let store = SupportStore::from_files("data/customers.json", "data/orders.json")?;
//!     let tools = ToolRegistry::with_support_tools(store.into_shared());
//!     let client = AnthropicClient::new(api_key, "claude-3-5-sonnet-20241022".to_string());
//!
//!     let mut agent = SupportAgent::new(Box::new(client), tools);
//!     let turn = agent.respond("Where is order 24601?").await?;
//!     println!("{}", turn.reply);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`store`] - Customer and order data
//! - [`tools`] - Tool definitions and the dispatch registry
//! - [`llm`] - Model client trait and the Anthropic Messages API client
//! - [`agent`] - The conversational loop and the interactive session
//! - [`memory`] - Bounded conversation history
//! - [`types`] - Common types and error handling

#![warn(rustdoc::missing_crate_level_docs)]

/// Conversational loop and interactive session.
pub mod agent;
/// Command-line parsing and colored output.
pub mod cli;
/// LLM provider clients and abstractions.
pub mod llm;
/// Bounded conversation history.
pub mod memory;
/// Default system prompt.
pub mod prompt;
/// Customer and order data.
pub mod store;
/// Support tools and the tool registry.
pub mod tools;
/// Core types (messages, tool calls, errors).
pub mod types;
/// Configuration.
pub mod utils;

// Re-export commonly used types
pub use agent::{extract_reply, AgentTurn, SupportAgent};
pub use llm::{AnthropicClient, ChatRequest, LLMClient, LLMResponse};
pub use store::{SharedStore, SupportStore};
pub use tools::registry::ToolRegistry;
pub use types::{AppError, Result};
pub use utils::config::SupportConfig;
