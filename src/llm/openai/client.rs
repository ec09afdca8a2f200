//! OpenAI-compatible client implementation

use async_trait::async_trait;
use reqwest::Client;

use crate::llm::core::{
    error::LlmError,
    provider::LlmProvider,
    types::{GenerateRequest, GenerateResponse},
};

use super::mapper::{from_openai_response, to_openai_request};
use super::types::OpenAiErrorEnvelope;

/// Model identifiers for the chat completions API
#[derive(Debug, Clone)]
pub enum OpenAiModel {
    /// GPT-4 Turbo
    Gpt4Turbo,
    /// GPT-4o
    Gpt4o,
    /// GPT-4o mini
    Gpt4oMini,
}

impl OpenAiModel {
    /// Get the model identifier string
    pub fn as_str(&self) -> &str {
        match self {
            OpenAiModel::Gpt4Turbo => "gpt-4-turbo",
            OpenAiModel::Gpt4o => "gpt-4o",
            OpenAiModel::Gpt4oMini => "gpt-4o-mini",
        }
    }

    /// Look up a model by its identifier string
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "gpt-4-turbo" => Some(OpenAiModel::Gpt4Turbo),
            "gpt-4o" => Some(OpenAiModel::Gpt4o),
            "gpt-4o-mini" => Some(OpenAiModel::Gpt4oMini),
            _ => None,
        }
    }
}

/// Client for OpenAI-compatible chat completion endpoints
pub struct OpenAiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// API key sent as a bearer token
    api_key: String,
    /// API base URL without a trailing slash
    base_url: String,
    /// Model to use
    model: OpenAiModel,
}

impl OpenAiClient {
    /// Create a new client
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key sent as a bearer token
    /// * `base_url` - API base URL (e.g., "https://api.openai.com/v1")
    /// * `model` - model to use
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or the HTTP client cannot
    /// be constructed.
    pub fn new(api_key: String, base_url: String, model: OpenAiModel) -> Result<Self, LlmError> {
        if api_key.is_empty() {
            return Err(LlmError::AuthenticationError(
                "API key must not be empty".to_string(),
            ));
        }

        let http_client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .map_err(|e| LlmError::HttpError {
                status: 0,
                body: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        })
    }

    /// Build the chat completions endpoint URL
    fn build_endpoint_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Make a single chat completion request
    async fn make_request(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError> {
        let wire_request = to_openai_request(request, self.model.as_str());

        let url = self.build_endpoint_url();
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&wire_request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());

            if status.as_u16() == 401 {
                return Err(LlmError::AuthenticationError(body));
            }

            // Prefer the structured error envelope when the body carries one
            if let Ok(envelope) = serde_json::from_str::<OpenAiErrorEnvelope>(&body) {
                return Err(LlmError::ProviderError {
                    code: envelope.error.kind.unwrap_or_else(|| "unknown".to_string()),
                    message: envelope.error.message,
                });
            }

            return Err(LlmError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let wire_response = response.json().await?;
        from_openai_response(wire_response)
    }
}

#[async_trait]
impl LlmProvider for OpenAiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError> {
        self.make_request(request).await
    }
}
