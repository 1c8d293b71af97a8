//! Anthropic Claude LLM client implementation
//!
//! Talks to the Messages API directly over `reqwest`.
//!
//! # Example
//!
//! ```rust,ignore
//! use acme_support::llm::{AnthropicClient, LLMClient};
//!
//! let client = AnthropicClient::new(api_key, "claude-3-5-sonnet-20241022".to_string());
//! let response = client.chat(&request).await?;
//! ```

use crate::llm::client::{ChatRequest, LLMClient, LLMResponse, ModelParams, StopReason, TokenUsage};
use crate::types::{AppError, ContentBlock, Message, Result, ToolDefinition};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default API endpoint root
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic Claude client for API-based inference
pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    params: ModelParams,
}

impl AnthropicClient {
    /// Create a new Anthropic client
    ///
    /// # Arguments
    ///
    /// * `api_key` - Anthropic API key
    /// * `model` - Model identifier (e.g., "claude-3-5-sonnet-20241022")
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_params(api_key, model, ModelParams::default())
    }

    /// Create a new Anthropic client with model parameters
    pub fn with_params(api_key: String, model: String, params: ModelParams) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
            params,
        }
    }

    /// Point the client at a different API root (proxies, test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the max tokens, defaulting to 4096 if not specified
    fn max_tokens(&self) -> u32 {
        self.params.max_tokens.unwrap_or(4096)
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    fn convert_tool(tool: &ToolDefinition) -> AnthropicTool<'_> {
        AnthropicTool {
            name: &tool.name,
            description: &tool.description,
            input_schema: &tool.parameters,
        }
    }

    fn build_request<'a>(&'a self, request: &'a ChatRequest) -> MessagesRequest<'a> {
        MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens(),
            temperature: self.params.temperature,
            system: &request.system,
            tools: request.tools.iter().map(Self::convert_tool).collect(),
            messages: &request.messages,
        }
    }
}

#[async_trait]
impl LLMClient for AnthropicClient {
    async fn chat(&self, request: &ChatRequest) -> Result<LLMResponse> {
        let body = self.build_request(request);
        debug!(
            model = %self.model,
            messages = request.messages.len(),
            tools = request.tools.len(),
            "Sending Anthropic request"
        );

        let response = self
            .http
            .post(self.endpoint())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::LLM(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::LLM(format!(
                "Anthropic request failed ({}): {}",
                status, text
            )));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| AppError::LLM(format!("Failed to parse response: {}", e)))?;

        let usage = TokenUsage::new(parsed.usage.input_tokens, parsed.usage.output_tokens);
        debug!(
            stop_reason = ?parsed.stop_reason,
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "Anthropic response received"
        );

        Ok(LLMResponse {
            content: parsed.content,
            stop_reason: StopReason::parse(parsed.stop_reason.as_deref()),
            usage: Some(usage),
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

// Anthropic API types

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    system: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<AnthropicTool<'a>>,
    messages: &'a [Message],
}

#[derive(Debug, Serialize)]
struct AnthropicTool<'a> {
    name: &'a str,
    description: &'a str,
    input_schema: &'a serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    stop_reason: Option<String>,
    usage: AnthropicUsage,
}

#[derive(Debug, Deserialize)]
struct AnthropicUsage {
    input_tokens: u32,
    output_tokens: u32,
}
