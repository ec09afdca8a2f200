// Gateway request/response envelope types

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Model name reported by the gateway and used when a request omits one
pub const DEFAULT_MODEL_ID: &str = "docbridge-agent";

/// A single role/content chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Inbound chat completion request
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    DEFAULT_MODEL_ID.to_string()
}

/// A single completion choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub index: u32,
    pub message: ChatMessage,
    pub finish_reason: String,
}

/// Word-count based usage figures
///
/// Counts are whitespace-delimited words of the query and the reply, not
/// tokenizer output; the envelope promises an approximation only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl Usage {
    /// Compute usage from the query and reply texts
    pub fn from_word_counts(prompt: &str, completion: &str) -> Self {
        let prompt_tokens = prompt.split_whitespace().count() as u32;
        let completion_tokens = completion.split_whitespace().count() as u32;
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

/// Outbound chat completion envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<Choice>,
    pub usage: Usage,
}

impl ChatCompletionResponse {
    /// Build the envelope around the agent's final answer
    pub fn new(model: impl Into<String>, query: &str, answer: impl Into<String>) -> Self {
        let answer = answer.into();
        let usage = Usage::from_word_counts(query, &answer);

        Self {
            id: format!("chatcmpl-{}", Uuid::new_v4()),
            object: "chat.completion".to_string(),
            created: Utc::now().timestamp(),
            model: model.into(),
            choices: vec![Choice {
                index: 0,
                message: ChatMessage {
                    role: "assistant".to_string(),
                    content: answer,
                },
                finish_reason: "stop".to_string(),
            }],
            usage,
        }
    }
}

/// Static model metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub owned_by: String,
}

impl ModelInfo {
    /// Metadata entry for a model id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            object: "model".to_string(),
            created: Utc::now().timestamp(),
            owned_by: "organization-owner".to_string(),
        }
    }
}

/// Envelope for the model listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelListResponse {
    pub data: Vec<ModelInfo>,
}

/// Request body for direct document creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDocumentRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub metadata: Option<String>,
}

/// Query parameters for document search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub query: String,
}

/// Error body returned on failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
