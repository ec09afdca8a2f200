//! Mapping between abstraction types and OpenAI wire types

use crate::llm::core::{
    error::LlmError,
    types::{
        ContentBlock, FinishReason, GenerateRequest, GenerateResponse, Message, MessageRole,
        UsageMetadata,
    },
};

use super::types::{
    OpenAiChatRequest, OpenAiChatResponse, OpenAiFunctionCall, OpenAiFunctionDef, OpenAiMessage,
    OpenAiTool, OpenAiToolCall,
};

/// Convert our abstraction request to the OpenAI wire format
pub fn to_openai_request(request: GenerateRequest, model: &str) -> OpenAiChatRequest {
    let mut messages = Vec::new();

    // The system prompt travels as the first message
    if let Some(system) = request.system {
        messages.push(OpenAiMessage {
            role: "system".to_string(),
            content: Some(system),
            tool_calls: None,
            tool_call_id: None,
        });
    }

    for message in request.messages {
        push_wire_messages(message, &mut messages);
    }

    OpenAiChatRequest {
        model: model.to_string(),
        messages,
        tools: request.tools.map(|tools| {
            tools
                .into_iter()
                .map(|tool| OpenAiTool {
                    tool_type: "function".to_string(),
                    function: OpenAiFunctionDef {
                        name: tool.name,
                        description: tool.description,
                        parameters: tool.input_schema,
                    },
                })
                .collect()
        }),
        max_tokens: Some(request.config.max_tokens),
        temperature: request.config.temperature,
        top_p: request.config.top_p,
    }
}

/// Convert one abstraction message into wire messages
///
/// The mapping is 1-to-N: a tool message carrying several results becomes
/// one wire message per result, because the API requires a separate "tool"
/// role message per tool_call_id.
fn push_wire_messages(message: Message, out: &mut Vec<OpenAiMessage>) {
    match message.role {
        MessageRole::User => {
            out.push(OpenAiMessage {
                role: "user".to_string(),
                content: Some(joined_text(&message.content)),
                tool_calls: None,
                tool_call_id: None,
            });
        }
        MessageRole::Assistant => {
            let text = joined_text(&message.content);
            let tool_calls: Vec<OpenAiToolCall> = message
                .content
                .into_iter()
                .filter_map(|block| match block {
                    ContentBlock::ToolUse { id, name, input } => Some(OpenAiToolCall {
                        id,
                        call_type: "function".to_string(),
                        function: OpenAiFunctionCall {
                            name,
                            arguments: input.to_string(),
                        },
                    }),
                    _ => None,
                })
                .collect();

            out.push(OpenAiMessage {
                role: "assistant".to_string(),
                content: if text.is_empty() { None } else { Some(text) },
                tool_calls: if tool_calls.is_empty() {
                    None
                } else {
                    Some(tool_calls)
                },
                tool_call_id: None,
            });
        }
        MessageRole::Tool => {
            for block in message.content {
                if let ContentBlock::ToolResult {
                    tool_call_id,
                    content,
                    ..
                } = block
                {
                    out.push(OpenAiMessage {
                        role: "tool".to_string(),
                        content: Some(content),
                        tool_calls: None,
                        tool_call_id: Some(tool_call_id),
                    });
                }
            }
        }
    }
}

fn joined_text(blocks: &[ContentBlock]) -> String {
    let mut text = String::new();
    for block in blocks {
        if let ContentBlock::Text { text: t } = block {
            text.push_str(t);
        }
    }
    text
}

/// Convert an OpenAI response to our abstraction's GenerateResponse
///
/// Tool-call arguments arrive as a JSON-encoded string; they are parsed
/// here so the rest of the stack only ever sees structured values.
pub fn from_openai_response(response: OpenAiChatResponse) -> Result<GenerateResponse, LlmError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::ProviderError {
            code: "empty_response".to_string(),
            message: "response contained no choices".to_string(),
        })?;

    let mut content = Vec::new();

    if let Some(text) = choice.message.content {
        if !text.is_empty() {
            content.push(ContentBlock::Text { text });
        }
    }

    for call in choice.message.tool_calls.unwrap_or_default() {
        let input = serde_json::from_str(&call.function.arguments).map_err(|e| {
            LlmError::SerializationError(format!(
                "tool call arguments for '{}' are not valid JSON: {}",
                call.function.name, e
            ))
        })?;

        content.push(ContentBlock::ToolUse {
            id: call.id,
            name: call.function.name,
            input,
        });
    }

    let has_tool_use = content
        .iter()
        .any(|block| matches!(block, ContentBlock::ToolUse { .. }));

    let finish_reason = match choice.finish_reason.as_deref() {
        Some("stop") => FinishReason::Stop,
        Some("length") => FinishReason::Length,
        Some("tool_calls") => FinishReason::ToolCalls,
        Some("content_filter") => FinishReason::ContentFilter,
        Some(other) => FinishReason::Other(other.to_string()),
        None if has_tool_use => FinishReason::ToolCalls,
        None => FinishReason::Stop,
    };

    let usage = response
        .usage
        .map(|u| UsageMetadata::new(u.prompt_tokens, u.completion_tokens))
        .unwrap_or_else(|| UsageMetadata::new(0, 0));

    Ok(GenerateResponse {
        content,
        finish_reason,
        usage,
    })
}
