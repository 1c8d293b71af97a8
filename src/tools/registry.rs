use crate::types::{AppError, Result, ToolDefinition};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn parameters_schema(&self) -> Value;
    async fn execute(&self, args: Value) -> Result<Value>;
}

/// Deserialize a tool's argument bag into its parameter struct.
///
/// Shape mismatches become [`AppError::InvalidArguments`].
pub fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T> {
    serde_json::from_value(args).map_err(|e| AppError::InvalidArguments(e.to_string()))
}

pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Create a registry with the four customer/order tools bound to `store`
    pub fn with_support_tools(store: crate::store::SharedStore) -> Self {
        use crate::tools::support::{CancelOrder, GetCustomerOrders, GetOrderById, GetUser};

        let mut registry = Self::new();
        registry.register(Arc::new(GetUser::new(store.clone())));
        registry.register(Arc::new(GetOrderById::new(store.clone())));
        registry.register(Arc::new(GetCustomerOrders::new(store.clone())));
        registry.register(Arc::new(CancelOrder::new(store)));
        registry
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Tool schemas for the model, sorted by name
    pub fn get_tool_definitions(&self) -> Vec<ToolDefinition> {
        let mut definitions: Vec<ToolDefinition> = self
            .tools
            .values()
            .map(|tool| ToolDefinition {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                parameters: tool.parameters_schema(),
            })
            .collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }

    pub async fn execute(&self, name: &str, args: Value) -> Result<Value> {
        if let Some(tool) = self.tools.get(name) {
            tool.execute(args).await
        } else {
            Err(AppError::NotFound(format!("Tool not found: {}", name)))
        }
    }

    /// Execute a tool and fold every failure into a descriptive value.
    ///
    /// This never fails: an unknown name, a bad argument bag or an execution
    /// error all come back as an `Error: ...` string for the model to read.
    pub async fn dispatch(&self, name: &str, args: Value) -> Value {
        let Some(tool) = self.tools.get(name) else {
            warn!(tool = name, "Model requested an unknown tool");
            return Value::String(format!(
                "Error: Invalid tool name '{}'. Please verify the tool.",
                name
            ));
        };

        info!(tool = name, "Executing tool");
        match tool.execute(args).await {
            Ok(value) => value,
            Err(AppError::InvalidArguments(details)) => {
                warn!(tool = name, %details, "Tool arguments rejected");
                Value::String(format!(
                    "Error: Invalid input for tool '{}'. Details: {}",
                    name, details
                ))
            }
            Err(e) => {
                warn!(tool = name, error = %e, "Tool execution failed");
                Value::String(format!(
                    "Error: Failed to execute tool '{}'. Details: {}",
                    name, e
                ))
            }
        }
    }

    /// Get a list of all registered tool names
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Check if a tool is registered
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }
}
