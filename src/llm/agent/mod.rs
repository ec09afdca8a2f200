//! Agent loop implementation
//!
//! The agent takes a single user message and drives the model to a final
//! text answer: it calls the provider with the available tool
//! declarations, executes whatever tools the model requests, feeds the
//! results back, and repeats until the model replies with text only (or
//! the iteration cap is hit).
//!
//! Each `run` starts from a fresh conversation. The agent holds no state
//! between calls, so one instance can be shared across requests.

mod error;

pub use error::AgentError;

use std::sync::Arc;

use crate::llm::core::{
    config::GenerationConfig,
    provider::LlmProvider,
    types::{ContentBlock, GenerateRequest, Message, MessageRole, ToolDeclaration, UsageMetadata},
};
use crate::llm::tools::ToolExecutor;

/// Final result of an agent run
#[derive(Debug, Clone)]
pub struct AgentReply {
    /// The model's final text answer
    pub text: String,
    /// Provider token usage accumulated across all iterations
    pub usage: UsageMetadata,
}

/// Drives the model/tool loop for a single query
pub struct Agent {
    /// LLM provider
    provider: Arc<dyn LlmProvider>,

    /// Tool executor for handling function calls
    tool_executor: Arc<dyn ToolExecutor>,

    /// Tool declarations available to the model
    tool_declarations: Vec<ToolDeclaration>,

    /// Generation configuration (temperature, max_tokens, etc.)
    config: GenerationConfig,

    /// System prompt (optional)
    system: Option<String>,

    /// Maximum number of agent loop iterations (default: 10)
    max_iterations: usize,
}

impl Agent {
    /// Create a new agent with default settings
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        tool_executor: Arc<dyn ToolExecutor>,
        tool_declarations: Vec<ToolDeclaration>,
        config: GenerationConfig,
        system: Option<String>,
    ) -> Self {
        Self {
            provider,
            tool_executor,
            tool_declarations,
            config,
            system,
            max_iterations: 10,
        }
    }

    /// Set the maximum number of iterations (default: 10)
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    /// Run the loop for one user message and return the final answer
    ///
    /// Tool failures are not errors at this level: the failure message is
    /// fed back to the model as an error tool-result and the loop
    /// continues, which is what lets the model recover or report the
    /// problem in its answer.
    pub async fn run(&self, user_message: impl Into<String>) -> Result<AgentReply, AgentError> {
        let mut messages = vec![Message::user(user_message)];
        let mut usage = UsageMetadata::new(0, 0);

        for iteration in 1..=self.max_iterations {
            tracing::debug!(iteration, "calling model");

            let request = GenerateRequest {
                messages: messages.clone(),
                tools: Some(self.tool_declarations.clone()),
                config: self.config.clone(),
                system: self.system.clone(),
            };

            let response = self.provider.generate(request).await?;
            usage.add(&response.usage);

            let mut text = String::new();
            let mut tool_uses = Vec::new();
            for block in response.content {
                match block {
                    ContentBlock::Text { text: t } => text.push_str(&t),
                    ContentBlock::ToolUse { .. } => tool_uses.push(block),
                    ContentBlock::ToolResult { .. } => {}
                }
            }

            if tool_uses.is_empty() {
                if text.is_empty() {
                    return Err(AgentError::NoContent);
                }

                tracing::debug!(
                    iterations = iteration,
                    input_tokens = usage.input_tokens,
                    output_tokens = usage.output_tokens,
                    "agent completed"
                );
                return Ok(AgentReply { text, usage });
            }

            // Record the assistant turn, tool requests included
            let mut assistant_content = Vec::new();
            if !text.is_empty() {
                assistant_content.push(ContentBlock::Text { text });
            }
            assistant_content.extend(tool_uses.iter().cloned());
            messages.push(Message {
                role: MessageRole::Assistant,
                content: assistant_content,
            });

            for block in &tool_uses {
                if let ContentBlock::ToolUse { id, name, input } = block {
                    tracing::debug!(tool = %name, "executing tool");

                    match self
                        .tool_executor
                        .execute(id.clone(), name.clone(), input.clone())
                        .await
                    {
                        Ok(result) => {
                            messages.push(Message::tool_result(id.clone(), result));
                        }
                        Err(error) => {
                            tracing::warn!(tool = %name, %error, "tool execution failed");
                            messages.push(Message::tool_error(id.clone(), error));
                        }
                    }
                }
            }
        }

        Err(AgentError::MaxIterationsReached(self.max_iterations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::core::error::LlmError;
    use crate::llm::core::types::{FinishReason, GenerateResponse};
    use async_trait::async_trait;
    use std::sync::Mutex;

    // Scripted provider: pops one response per call, records every request
    struct MockProvider {
        responses: Mutex<Vec<GenerateResponse>>,
        requests: Mutex<Vec<GenerateRequest>>,
    }

    impl MockProvider {
        fn new(mut responses: Vec<GenerateResponse>) -> Self {
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for MockProvider {
        async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| LlmError::ProviderError {
                    code: "exhausted".to_string(),
                    message: "no scripted responses left".to_string(),
                })
        }
    }

    struct MockExecutor {
        fail: bool,
    }

    #[async_trait]
    impl ToolExecutor for MockExecutor {
        async fn execute(
            &self,
            _tool_call_id: String,
            name: String,
            _arguments: serde_json::Value,
        ) -> Result<String, String> {
            if self.fail {
                Err(format!("tool {} blew up", name))
            } else {
                Ok(serde_json::json!([{"id": 1, "title": "T"}]).to_string())
            }
        }
    }

    fn text_response(text: &str) -> GenerateResponse {
        GenerateResponse {
            content: vec![ContentBlock::Text {
                text: text.to_string(),
            }],
            finish_reason: FinishReason::Stop,
            usage: UsageMetadata::new(10, 5),
        }
    }

    fn tool_response(name: &str) -> GenerateResponse {
        GenerateResponse {
            content: vec![ContentBlock::ToolUse {
                id: "call_1".to_string(),
                name: name.to_string(),
                input: serde_json::json!({}),
            }],
            finish_reason: FinishReason::ToolCalls,
            usage: UsageMetadata::new(10, 5),
        }
    }

    fn make_agent(provider: MockProvider, executor: MockExecutor) -> (Agent, Arc<MockProvider>) {
        let provider = Arc::new(provider);
        let agent = Agent::new(
            provider.clone(),
            Arc::new(executor),
            vec![],
            GenerationConfig::new(256),
            Some("You are helpful.".to_string()),
        );
        (agent, provider)
    }

    #[tokio::test]
    async fn test_text_only_response_completes_immediately() {
        let (agent, provider) = make_agent(
            MockProvider::new(vec![text_response("Done.")]),
            MockExecutor { fail: false },
        );

        let reply = agent.run("hello").await.unwrap();
        assert_eq!(reply.text, "Done.");
        assert_eq!(reply.usage.total_tokens, 15);
        assert_eq!(provider.requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_tool_round_then_answer() {
        let (agent, provider) = make_agent(
            MockProvider::new(vec![
                tool_response("list_documents"),
                text_response("There is 1 document."),
            ]),
            MockExecutor { fail: false },
        );

        let reply = agent.run("list all documents").await.unwrap();
        assert_eq!(reply.text, "There is 1 document.");
        // Usage accumulates across both iterations
        assert_eq!(reply.usage.total_tokens, 30);

        // Second request must carry the assistant tool call and its result
        let requests = provider.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        let second = &requests[1];
        assert_eq!(second.messages.len(), 3);
        assert_eq!(second.messages[1].role, MessageRole::Assistant);
        assert_eq!(second.messages[2].role, MessageRole::Tool);
        match &second.messages[2].content[0] {
            ContentBlock::ToolResult {
                tool_call_id,
                is_error,
                ..
            } => {
                assert_eq!(tool_call_id, "call_1");
                assert!(!is_error);
            }
            _ => panic!("Expected tool result"),
        }
    }

    #[tokio::test]
    async fn test_tool_failure_is_fed_back_not_fatal() {
        let (agent, provider) = make_agent(
            MockProvider::new(vec![
                tool_response("search_documents"),
                text_response("The search tool is unavailable."),
            ]),
            MockExecutor { fail: true },
        );

        let reply = agent.run("find docs").await.unwrap();
        assert_eq!(reply.text, "The search tool is unavailable.");

        let requests = provider.requests.lock().unwrap();
        match &requests[1].messages[2].content[0] {
            ContentBlock::ToolResult {
                content, is_error, ..
            } => {
                assert!(is_error);
                assert!(content.contains("blew up"));
            }
            _ => panic!("Expected tool result"),
        }
    }

    #[tokio::test]
    async fn test_max_iterations_reached() {
        let (agent, _provider) = make_agent(
            MockProvider::new(vec![
                tool_response("list_documents"),
                tool_response("list_documents"),
                tool_response("list_documents"),
            ]),
            MockExecutor { fail: false },
        );
        let agent = agent.with_max_iterations(3);

        let result = agent.run("loop forever").await;
        assert!(matches!(result, Err(AgentError::MaxIterationsReached(3))));
    }

    #[tokio::test]
    async fn test_empty_response_is_no_content() {
        let (agent, _provider) = make_agent(
            MockProvider::new(vec![GenerateResponse {
                content: vec![],
                finish_reason: FinishReason::Stop,
                usage: UsageMetadata::new(1, 0),
            }]),
            MockExecutor { fail: false },
        );

        let result = agent.run("hello").await;
        assert!(matches!(result, Err(AgentError::NoContent)));
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let (agent, _provider) = make_agent(
            MockProvider::new(vec![]),
            MockExecutor { fail: false },
        );

        let result = agent.run("hello").await;
        assert!(matches!(result, Err(AgentError::Llm(_))));
    }

    #[tokio::test]
    async fn test_runs_are_independent() {
        let (agent, provider) = make_agent(
            MockProvider::new(vec![text_response("First."), text_response("Second.")]),
            MockExecutor { fail: false },
        );

        agent.run("one").await.unwrap();
        agent.run("two").await.unwrap();

        // The second run must not see the first run's conversation
        let requests = provider.requests.lock().unwrap();
        assert_eq!(requests[1].messages.len(), 1);
        assert_eq!(requests[1].messages[0].role, MessageRole::User);
    }
}
