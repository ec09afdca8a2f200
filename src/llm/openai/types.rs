//! OpenAI-specific request and response types
//!
//! These types map directly to the chat completions API schema, which is
//! also the de-facto wire format of OpenAI-compatible endpoints.

use serde::{Deserialize, Serialize};

/// Request body for the chat completions endpoint
#[derive(Debug, Clone, Serialize)]
pub struct OpenAiChatRequest {
    /// Model identifier
    pub model: String,
    /// Conversation so far, system message first
    pub messages: Vec<OpenAiMessage>,
    /// Tools the model may call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<OpenAiTool>>,
    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Nucleus sampling threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

/// A single wire-format message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiMessage {
    /// Role: "system", "user", "assistant", or "tool"
    pub role: String,
    /// Text content; absent on assistant messages that only call tools
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Tool invocations requested by the assistant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<OpenAiToolCall>>,
    /// Id of the call a "tool" role message responds to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

/// A tool invocation within an assistant message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiToolCall {
    /// Call identifier, echoed back in the tool result
    pub id: String,
    /// Always "function"
    #[serde(rename = "type")]
    pub call_type: String,
    /// The function being invoked
    pub function: OpenAiFunctionCall,
}

/// Function name and arguments of a tool call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiFunctionCall {
    /// Function name
    pub name: String,
    /// Arguments as a JSON-encoded string
    pub arguments: String,
}

/// Tool definition offered to the model
#[derive(Debug, Clone, Serialize)]
pub struct OpenAiTool {
    /// Always "function"
    #[serde(rename = "type")]
    pub tool_type: String,
    /// The function definition
    pub function: OpenAiFunctionDef,
}

/// Function definition with its parameter schema
#[derive(Debug, Clone, Serialize)]
pub struct OpenAiFunctionDef {
    /// Function name
    pub name: String,
    /// What the function does
    pub description: String,
    /// JSON Schema for the arguments object
    pub parameters: serde_json::Value,
}

/// Response body of the chat completions endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiChatResponse {
    /// Response identifier
    pub id: String,
    /// Generated choices; the first one is used
    pub choices: Vec<OpenAiChoice>,
    /// Token usage, when reported
    pub usage: Option<OpenAiUsage>,
}

/// A single generated choice
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiChoice {
    /// The generated message
    pub message: OpenAiMessage,
    /// "stop", "length", "tool_calls", or "content_filter"
    pub finish_reason: Option<String>,
}

/// Token usage as reported by the API
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OpenAiUsage {
    /// Prompt tokens consumed
    pub prompt_tokens: u32,
    /// Completion tokens generated
    pub completion_tokens: u32,
}

/// Error envelope returned on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiErrorEnvelope {
    /// The error payload
    pub error: OpenAiApiError,
}

/// Error payload within the envelope
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiApiError {
    /// Human-readable description
    pub message: String,
    /// Error class, e.g. "invalid_request_error"
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}
