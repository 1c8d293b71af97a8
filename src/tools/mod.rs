//! Tools the model can call against the support store
//!
//! # Module Structure
//!
//! - [`registry`](crate::tools::registry) - The `Tool` trait and the dispatch table
//! - [`support`](crate::tools::support) - `get_user`, `get_order_by_id`,
//!   `get_customer_orders` and `cancel_order`
//!
//! # Dispatch
//!
//! ```ignore
//! let registry = ToolRegistry::with_support_tools(store.into_shared());
//! let tools = registry.get_tool_definitions();  // Schemas sent to the model
//! let result = registry.dispatch("cancel_order", json!({"order_id": "13579"})).await;
//! ```
//!
//! `dispatch` never fails. Unknown tools, malformed arguments and execution
//! errors are returned as `Error: ...` strings so one bad call cannot end the
//! session.

/// Tool registry and dispatch.
pub mod registry;
/// Customer and order tools.
pub mod support;

pub use registry::{Tool, ToolRegistry};
