// Handlers module

pub mod chat;
pub mod documents;
pub mod info;

pub use chat::chat_completions_handler;
pub use documents::{create_document_handler, list_documents_handler, search_documents_handler};
pub use info::{health_handler, model_info_handler};

use warp::http::StatusCode;

use crate::models::ErrorResponse;

/// JSON error reply with the given status
pub(crate) fn error_reply(
    status: StatusCode,
    message: &str,
) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(warp::reply::json(&ErrorResponse::new(message)), status)
}
