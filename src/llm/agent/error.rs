use crate::llm::core::error::LlmError;

/// Errors that can occur during agent execution
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// Error from the LLM provider
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// Model finished without producing any text
    #[error("Model returned no content")]
    NoContent,

    /// Maximum iterations reached without a final answer
    #[error("Maximum iterations reached ({0})")]
    MaxIterationsReached(usize),
}
