//! Provider trait for LLM implementations

use std::sync::Arc;

use async_trait::async_trait;

use super::{
    error::LlmError,
    types::{GenerateRequest, GenerateResponse},
};
use crate::llm::openai::{OpenAiClient, OpenAiModel};

/// Main interface that all LLM provider implementations must satisfy
///
/// The gateway is strictly request/response: one call produces one
/// complete reply, including any tool invocations the model requested.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a complete reply from the LLM
    ///
    /// # Arguments
    /// * `request` - The generation request with messages, tools, and config
    ///
    /// # Returns
    /// The model's complete reply, or an error if the request fails
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError>;
}

/// Create an LLM provider from a model specification
///
/// # Arguments
///
/// * `model` - The model to use
/// * `api_key` - API key sent as a bearer token
/// * `base_url` - API base URL (e.g., "https://api.openai.com/v1"), which
///   also allows pointing at any OpenAI-compatible endpoint
///
/// # Returns
///
/// A shared trait object implementing `LlmProvider`, or an error if client
/// creation fails
///
/// # Example
///
/// ```rust,no_run
/// use docbridge::llm::{create_provider, OpenAiModel};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = create_provider(
///     OpenAiModel::Gpt4Turbo,
///     "sk-...".to_string(),
///     "https://api.openai.com/v1".to_string(),
/// )?;
/// # Ok(())
/// # }
/// ```
pub fn create_provider(
    model: OpenAiModel,
    api_key: String,
    base_url: String,
) -> Result<Arc<dyn LlmProvider>, LlmError> {
    let client = OpenAiClient::new(api_key, base_url, model)?;
    Ok(Arc::new(client))
}
