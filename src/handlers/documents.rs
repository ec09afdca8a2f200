// /api/documents handlers - direct store access, bypassing the agent

use std::convert::Infallible;

use warp::http::StatusCode;

use crate::document_store::{DocumentStore, NewDocument};
use crate::handlers::error_reply;
use crate::models::{CreateDocumentRequest, SearchQuery};

/// POST /api/documents
pub async fn create_document_handler(
    request: CreateDocumentRequest,
    store: DocumentStore,
) -> Result<impl warp::Reply, Infallible> {
    let mut doc = NewDocument::new(request.title, request.content);
    if let Some(metadata) = request.metadata {
        doc = doc.with_metadata(metadata);
    }

    match store.create_document(doc).await {
        Ok(stored) => {
            tracing::info!(id = stored.id, "document created");
            Ok(warp::reply::with_status(
                warp::reply::json(&stored),
                StatusCode::OK,
            ))
        }
        Err(e) => {
            tracing::error!(error = %e, "document creation failed");
            Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                &e.to_string(),
            ))
        }
    }
}

/// GET /api/documents
pub async fn list_documents_handler(store: DocumentStore) -> Result<impl warp::Reply, Infallible> {
    match store.get_all_documents().await {
        Ok(docs) => Ok(warp::reply::with_status(
            warp::reply::json(&docs),
            StatusCode::OK,
        )),
        Err(e) => {
            tracing::error!(error = %e, "document listing failed");
            Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                &e.to_string(),
            ))
        }
    }
}

/// GET /api/documents/search?query=...
pub async fn search_documents_handler(
    params: SearchQuery,
    store: DocumentStore,
) -> Result<impl warp::Reply, Infallible> {
    match store.search_documents(&params.query).await {
        Ok(docs) => Ok(warp::reply::with_status(
            warp::reply::json(&docs),
            StatusCode::OK,
        )),
        Err(e) => {
            tracing::error!(error = %e, "document search failed");
            Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                &e.to_string(),
            ))
        }
    }
}
