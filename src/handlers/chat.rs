// POST /v1/chat/completions handler

use std::convert::Infallible;
use std::sync::Arc;

use warp::http::StatusCode;

use crate::handlers::error_reply;
use crate::llm::Agent;
use crate::models::{ChatCompletionRequest, ChatCompletionResponse};

/// Translate a chat completion request into one agent invocation
///
/// Only the last message's content is used as the query; prior messages
/// are accepted for wire compatibility but not replayed (the gateway
/// retains no conversation state).
pub async fn chat_completions_handler(
    request: ChatCompletionRequest,
    agent: Arc<Agent>,
) -> Result<impl warp::Reply, Infallible> {
    let query = match request.messages.last() {
        Some(message) => message.content.clone(),
        None => {
            return Ok(error_reply(
                StatusCode::BAD_REQUEST,
                "messages must contain at least one entry",
            ))
        }
    };

    tracing::info!(model = %request.model, "chat completion request");

    match agent.run(query.clone()).await {
        Ok(reply) => {
            let response = ChatCompletionResponse::new(request.model, &query, reply.text);
            Ok(warp::reply::with_status(
                warp::reply::json(&response),
                StatusCode::OK,
            ))
        }
        Err(e) => {
            tracing::error!(error = %e, "agent invocation failed");
            Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                &e.to_string(),
            ))
        }
    }
}
