//! Core types for the LLM abstraction layer

use serde::{Deserialize, Serialize};

use super::config::GenerationConfig;

/// Request to generate a reply from an LLM
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Conversation history
    pub messages: Vec<Message>,
    /// Available tools the model can call
    pub tools: Option<Vec<ToolDeclaration>>,
    /// Generation parameters
    pub config: GenerationConfig,
    /// System prompt/instructions
    pub system: Option<String>,
}

/// A single message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content blocks in the message
    pub content: Vec<ContentBlock>,
}

impl Message {
    /// Create a new user message with text content
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: vec![ContentBlock::Text { text: text.into() }],
        }
    }

    /// Create a new assistant message with text content
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: vec![ContentBlock::Text { text: text.into() }],
        }
    }

    /// Create a new tool message carrying a tool result
    pub fn tool_result(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Tool,
            content: vec![ContentBlock::ToolResult {
                tool_call_id: tool_call_id.into(),
                content: content.into(),
                is_error: false,
            }],
        }
    }

    /// Create a new tool message carrying an error result
    pub fn tool_error(tool_call_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Tool,
            content: vec![ContentBlock::ToolResult {
                tool_call_id: tool_call_id.into(),
                content: error.into(),
                is_error: true,
            }],
        }
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Human input
    User,
    /// Model output
    Assistant,
    /// Tool execution result
    Tool,
}

/// Content block within a message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain text content
    Text { text: String },
    /// Tool invocation requested by the model
    ToolUse {
        id: String,
        name: String,
        input: serde_json::Value,
    },
    /// Tool execution result fed back to the model
    ToolResult {
        tool_call_id: String,
        content: String,
        #[serde(default)]
        is_error: bool,
    },
}

/// Declaration of a tool available to the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDeclaration {
    /// Function name
    pub name: String,
    /// What the tool does
    pub description: String,
    /// JSON Schema for parameters
    pub input_schema: serde_json::Value,
}

/// Complete model reply to a single generate call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Content blocks produced by the model
    pub content: Vec<ContentBlock>,
    /// Why generation stopped
    pub finish_reason: FinishReason,
    /// Token usage for this call
    pub usage: UsageMetadata,
}

impl GenerateResponse {
    /// Concatenated text of all text blocks
    pub fn text(&self) -> String {
        let mut text = String::new();
        for block in &self.content {
            if let ContentBlock::Text { text: t } = block {
                text.push_str(t);
            }
        }
        text
    }

    /// Whether the model requested any tool invocations
    pub fn has_tool_use(&self) -> bool {
        self.content
            .iter()
            .any(|block| matches!(block, ContentBlock::ToolUse { .. }))
    }
}

/// Reason why generation finished
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural completion
    Stop,
    /// Hit token limit
    Length,
    /// Waiting for tool execution
    ToolCalls,
    /// Blocked by content filters
    ContentFilter,
    /// Provider-specific reason
    Other(String),
}

/// Token usage information
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UsageMetadata {
    /// Prompt tokens consumed
    pub input_tokens: u32,
    /// Response tokens generated
    pub output_tokens: u32,
    /// Sum of input and output
    pub total_tokens: u32,
}

impl UsageMetadata {
    /// Create new usage metadata
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens: input_tokens + output_tokens,
        }
    }

    /// Add usage from another metadata
    pub fn add(&mut self, other: &UsageMetadata) {
        self.input_tokens += other.input_tokens;
        self.output_tokens += other.output_tokens;
        self.total_tokens = self.input_tokens + self.output_tokens;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_user_constructor() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, MessageRole::User);
        assert_eq!(msg.content.len(), 1);
        match &msg.content[0] {
            ContentBlock::Text { text } => assert_eq!(text, "Hello"),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_message_assistant_constructor() {
        let msg = Message::assistant("Hi there");
        assert_eq!(msg.role, MessageRole::Assistant);
        match &msg.content[0] {
            ContentBlock::Text { text } => assert_eq!(text, "Hi there"),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_message_tool_result_constructor() {
        let msg = Message::tool_result("call-123", "result data");
        assert_eq!(msg.role, MessageRole::Tool);
        match &msg.content[0] {
            ContentBlock::ToolResult {
                tool_call_id,
                content,
                is_error,
            } => {
                assert_eq!(tool_call_id, "call-123");
                assert_eq!(content, "result data");
                assert!(!is_error);
            }
            _ => panic!("Expected tool result content"),
        }
    }

    #[test]
    fn test_message_tool_error_constructor() {
        let msg = Message::tool_error("call-456", "boom");
        match &msg.content[0] {
            ContentBlock::ToolResult { is_error, .. } => assert!(is_error),
            _ => panic!("Expected tool result content"),
        }
    }

    #[test]
    fn test_response_text_concatenates_blocks() {
        let response = GenerateResponse {
            content: vec![
                ContentBlock::Text {
                    text: "Hello ".to_string(),
                },
                ContentBlock::Text {
                    text: "world".to_string(),
                },
            ],
            finish_reason: FinishReason::Stop,
            usage: UsageMetadata::new(1, 2),
        };

        assert_eq!(response.text(), "Hello world");
        assert!(!response.has_tool_use());
    }

    #[test]
    fn test_response_has_tool_use() {
        let response = GenerateResponse {
            content: vec![ContentBlock::ToolUse {
                id: "call-1".to_string(),
                name: "search_documents".to_string(),
                input: serde_json::json!({"query": "cloud"}),
            }],
            finish_reason: FinishReason::ToolCalls,
            usage: UsageMetadata::new(1, 2),
        };

        assert!(response.has_tool_use());
        assert_eq!(response.text(), "");
    }

    #[test]
    fn test_usage_metadata_add() {
        let mut usage = UsageMetadata::new(100, 50);
        let other = UsageMetadata::new(20, 30);
        usage.add(&other);
        assert_eq!(usage.input_tokens, 120);
        assert_eq!(usage.output_tokens, 80);
        assert_eq!(usage.total_tokens, 200);
    }

    #[test]
    fn test_content_block_serialization() {
        let tool_block = ContentBlock::ToolUse {
            id: "call-1".to_string(),
            name: "list_documents".to_string(),
            input: serde_json::json!({}),
        };
        let json = serde_json::to_string(&tool_block).unwrap();
        assert!(json.contains("\"type\":\"tool_use\""));

        let deserialized: ContentBlock = serde_json::from_str(&json).unwrap();
        match deserialized {
            ContentBlock::ToolUse { id, name, .. } => {
                assert_eq!(id, "call-1");
                assert_eq!(name, "list_documents");
            }
            _ => panic!("Expected tool use block"),
        }
    }

    #[test]
    fn test_finish_reason_serialization() {
        let reason = FinishReason::Stop;
        assert_eq!(serde_json::to_string(&reason).unwrap(), "\"stop\"");

        let reason = FinishReason::ToolCalls;
        assert_eq!(serde_json::to_string(&reason).unwrap(), "\"tool_calls\"");
    }
}
