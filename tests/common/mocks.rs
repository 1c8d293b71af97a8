//! Mock implementations for testing.
//!
//! A scripted model client that replays queued responses and records every
//! request it receives, so tests can drive the support loop without a
//! network connection and then inspect exactly what the model was sent.

#![allow(dead_code)]

use acme_support::llm::{ChatRequest, LLMClient, LLMResponse, StopReason, TokenUsage};
use acme_support::types::{AppError, ContentBlock, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;

/// Mock LLM client with a queue of scripted responses.
///
/// Clones share the same script and request log, so a test can keep one
/// handle after boxing another into the agent.
///
/// # Examples
///
/// ```ignore
/// let client = MockLLMClient::new()
///     .then(tool_use("toolu_1", "get_order_by_id", json!({"order_id": "24601"})))
///     .then(LLMResponse::text("<reply>It shipped.</reply>"));
/// ```
#[derive(Clone, Default)]
pub struct MockLLMClient {
    script: Arc<Mutex<VecDeque<Result<LLMResponse>>>>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockLLMClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response
    pub fn then(self, response: LLMResponse) -> Self {
        self.script.lock().push_back(Ok(response));
        self
    }

    /// Queue a failure
    pub fn then_fail(self, message: &str) -> Self {
        self.script
            .lock()
            .push_back(Err(AppError::LLM(message.to_string())));
        self
    }

    /// Every request received so far
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn remaining(&self) -> usize {
        self.script.lock().len()
    }
}

#[async_trait]
impl LLMClient for MockLLMClient {
    async fn chat(&self, request: &ChatRequest) -> Result<LLMResponse> {
        self.requests.lock().push(request.clone());
        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::LLM("Mock script exhausted".to_string())))
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// A response that stops to call one tool
pub fn tool_use(id: &str, name: &str, input: Value) -> LLMResponse {
    LLMResponse {
        content: vec![
            ContentBlock::Text {
                text: format!("<thinking>I should use {}</thinking>", name),
            },
            ContentBlock::ToolUse {
                id: id.to_string(),
                name: name.to_string(),
                input,
            },
        ],
        stop_reason: StopReason::ToolUse,
        usage: Some(TokenUsage::new(120, 30)),
    }
}

/// A response that stops to call several tools at once
pub fn multi_tool_use(calls: &[(&str, &str, Value)]) -> LLMResponse {
    LLMResponse {
        content: calls
            .iter()
            .map(|(id, name, input)| ContentBlock::ToolUse {
                id: id.to_string(),
                name: name.to_string(),
                input: input.clone(),
            })
            .collect(),
        stop_reason: StopReason::ToolUse,
        usage: None,
    }
}

/// A final reply wrapped in reply tags
pub fn reply(text: &str) -> LLMResponse {
    LLMResponse::text(format!(
        "<thinking>Answer the user.</thinking>\n<reply>{}</reply>",
        text
    ))
}
