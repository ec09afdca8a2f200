//! Tool executor trait

use async_trait::async_trait;

/// Trait for executing tool calls requested by the model
///
/// The executor receives the call id, the tool name, and the arguments as
/// a JSON value. Both outcomes are strings destined for the model: the
/// success result is fed back as a tool result, the error message as an
/// error tool result. Neither aborts the surrounding agent loop.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a tool call
    ///
    /// # Arguments
    ///
    /// * `tool_call_id` - Unique identifier for this invocation
    /// * `name` - Name of the tool to execute
    /// * `arguments` - Tool arguments as a JSON value
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Successful execution result (JSON string)
    /// * `Err(String)` - Error message describing what went wrong
    async fn execute(
        &self,
        tool_call_id: String,
        name: String,
        arguments: serde_json::Value,
    ) -> Result<String, String>;
}
