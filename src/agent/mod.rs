//! Support Agent - the tool-dispatch loop
//!
//! One call to [`SupportAgent::respond`] is one user turn:
//!
//! 1. The user text is appended to the history (the window is enforced here).
//! 2. System prompt, tool schemas and history go to the model.
//! 3. If the model stopped to use a tool, the call is dispatched against the
//!    store, the result is appended as a tool-result turn tagged with the
//!    call id, and the model is asked again without involving the user.
//! 4. Otherwise the `<reply>...</reply>` section of the text is returned.
//!
//! # One tool call per model response
//!
//! Only the last `tool_use` block of a response is executed. Any earlier ones
//! are answered with an error result asking the model to request them again,
//! which keeps every call paired with a result.
//!
//! A failed turn (model unreachable, too many tool rounds) is rolled back
//! unless a tool already ran. In that case the history keeps the exchange up
//! to the last tool result, so the next request shows the store change.

pub mod session;

use crate::llm::{ChatRequest, LLMClient, LLMResponse};
use crate::memory::{ConversationHistory, MAX_HISTORY_LENGTH};
use crate::tools::ToolRegistry;
use crate::types::{AppError, ContentBlock, Message, Result, ToolCall};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Shown when the model's text carries no `<reply>` section.
pub const REPLY_PLACEHOLDER: &str = "Unable to extract reply.";

/// Default bound on tool rounds within one user turn.
pub const MAX_TOOL_ITERATIONS: usize = 10;

static REPLY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<reply>(.*?)</reply>").expect("reply pattern is valid"));

/// Extract the user-facing reply from the model's text.
///
/// Returns the contents of the first `<reply>...</reply>` pair, or
/// [`REPLY_PLACEHOLDER`] when there is none.
pub fn extract_reply(text: &str) -> String {
    REPLY_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| REPLY_PLACEHOLDER.to_string())
}

/// Record of a tool call execution
#[derive(Debug, Clone)]
pub struct ToolCallRecord {
    pub id: String,
    pub name: String,
    pub arguments: Value,
    pub result: Value,
    pub duration_ms: u64,
}

/// Result of one user turn
#[derive(Debug, Clone)]
pub struct AgentTurn {
    /// Extracted reply (or the placeholder)
    pub reply: String,
    /// Full text of the final model response
    pub text: String,
    /// Tools executed during the turn, in order
    pub tool_calls: Vec<ToolCallRecord>,
    /// Number of model requests made
    pub iterations: usize,
}

/// The conversational loop over one model client and one tool registry
pub struct SupportAgent {
    client: Box<dyn LLMClient>,
    tools: ToolRegistry,
    history: ConversationHistory,
    system_prompt: String,
    max_tool_iterations: usize,
}

impl SupportAgent {
    pub fn new(client: Box<dyn LLMClient>, tools: ToolRegistry) -> Self {
        Self {
            client,
            tools,
            history: ConversationHistory::new(MAX_HISTORY_LENGTH),
            system_prompt: crate::prompt::DEFAULT_SYSTEM_PROMPT.to_string(),
            max_tool_iterations: MAX_TOOL_ITERATIONS,
        }
    }

    /// Set the system prompt
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Set the history window (drops any existing history)
    pub fn with_max_history(mut self, max_len: usize) -> Self {
        self.history = ConversationHistory::new(max_len);
        self
    }

    pub fn with_max_tool_iterations(mut self, max: usize) -> Self {
        self.max_tool_iterations = max;
        self
    }

    pub fn history(&self) -> Vec<Message> {
        self.history.messages()
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }

    /// Run one user turn to completion.
    ///
    /// # Errors
    ///
    /// Model failures and exceeding the tool-round bound. Tool failures are
    /// not errors; they reach the model as text.
    pub async fn respond(&mut self, user_input: &str) -> Result<AgentTurn> {
        self.respond_with_callback(user_input, |_| {}).await
    }

    /// Like [`respond`](Self::respond), calling `on_tool` right before each
    /// requested tool is executed.
    pub async fn respond_with_callback<F>(
        &mut self,
        user_input: &str,
        mut on_tool: F,
    ) -> Result<AgentTurn>
    where
        F: FnMut(&ToolCall),
    {
        let checkpoint = self.history.clone();
        let mut records = Vec::new();
        let result = self.run_turn(user_input, &mut records, &mut on_tool).await;

        if result.is_err() {
            if records.is_empty() {
                self.history = checkpoint;
            } else {
                // History ends with the last tool-result turn here
                warn!(
                    tools = records.len(),
                    "Turn failed after tools ran; keeping the tool exchange"
                );
            }
        }
        result
    }

    async fn run_turn(
        &mut self,
        user_input: &str,
        records: &mut Vec<ToolCallRecord>,
        on_tool: &mut dyn FnMut(&ToolCall),
    ) -> Result<AgentTurn> {
        self.history.push(Message::user(user_input));

        let tools = self.tools.get_tool_definitions();
        let mut iterations = 0;

        loop {
            iterations += 1;
            let request = ChatRequest {
                system: self.system_prompt.clone(),
                tools: tools.clone(),
                messages: self.history.messages(),
            };

            let response = self.client.chat(&request).await?;
            if let Some(usage) = response.usage {
                debug!(iterations, tokens = usage.total(), "Model responded");
            }

            if !response.wants_tool() {
                return Ok(self.finish_turn(response, std::mem::take(records), iterations));
            }

            if iterations > self.max_tool_iterations {
                return Err(AppError::Agent(format!(
                    "Max tool iterations ({}) exceeded",
                    self.max_tool_iterations
                )));
            }

            self.history.push(Message::assistant(response.content.clone()));

            let calls = response.tool_calls();
            let mut results = Vec::with_capacity(calls.len());
            if let Some((last, skipped)) = calls.split_last() {
                for call in skipped {
                    results.push(Self::skipped_result(call));
                }

                on_tool(last);
                let record = self.run_tool(last).await;
                results.push(ContentBlock::ToolResult {
                    tool_use_id: record.id.clone(),
                    content: stringify_result(&record.result),
                    is_error: false,
                });
                records.push(record);
            }

            self.history.push(Message::tool_results(results));
        }
    }

    fn finish_turn(
        &mut self,
        response: LLMResponse,
        tool_calls: Vec<ToolCallRecord>,
        iterations: usize,
    ) -> AgentTurn {
        let text = response.text_content();

        // Tool calls outside a tool_use stop are never answered; keep them out
        let kept: Vec<ContentBlock> = response
            .content
            .into_iter()
            .filter(|block| matches!(block, ContentBlock::Text { text: t } if !t.is_empty()))
            .collect();
        if !kept.is_empty() {
            self.history.push(Message::assistant(kept));
        }

        AgentTurn {
            reply: extract_reply(&text),
            text,
            tool_calls,
            iterations,
        }
    }

    async fn run_tool(&self, call: &ToolCall) -> ToolCallRecord {
        info!(tool = %call.name, id = %call.id, "Model requested tool");
        let start = Instant::now();
        let result = self.tools.dispatch(&call.name, call.arguments.clone()).await;
        let duration_ms = start.elapsed().as_millis() as u64;
        debug!(tool = %call.name, duration_ms, "Tool finished");

        ToolCallRecord {
            id: call.id.clone(),
            name: call.name.clone(),
            arguments: call.arguments.clone(),
            result,
            duration_ms,
        }
    }

    fn skipped_result(call: &ToolCall) -> ContentBlock {
        warn!(tool = %call.name, id = %call.id, "Skipping extra tool call in one response");
        ContentBlock::ToolResult {
            tool_use_id: call.id.clone(),
            content: format!(
                "Error: Only one tool call per turn is executed; '{}' was not run. Request it again if it is still needed.",
                call.name
            ),
            is_error: true,
        }
    }
}

/// Tool results go back to the model as text: strings verbatim, JSON compact.
fn stringify_result(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
