// Route definitions

use std::convert::Infallible;
use std::sync::Arc;

use warp::Filter;

use crate::document_store::DocumentStore;
use crate::handlers;
use crate::llm::Agent;
use crate::models::SearchQuery;

/// Assemble the full route tree
pub fn configure_routes(
    store: DocumentStore,
    agent: Arc<Agent>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    chat_routes(agent)
        .or(document_routes(store))
        .or(info_routes())
}

/// POST /v1/chat/completions
pub fn chat_routes(
    agent: Arc<Agent>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path("v1")
        .and(warp::path("chat"))
        .and(warp::path("completions"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_agent(agent))
        .and_then(handlers::chat_completions_handler)
}

/// Direct document endpoints under /api/documents
pub fn document_routes(
    store: DocumentStore,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let api = warp::path("api").and(warp::path("documents"));

    // GET /api/documents/search?query=
    let search = api
        .and(warp::path("search"))
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<SearchQuery>())
        .and(with_store(store.clone()))
        .and_then(handlers::search_documents_handler);

    // POST /api/documents
    let create = api
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_store(store.clone()))
        .and_then(handlers::create_document_handler);

    // GET /api/documents
    let list = api
        .and(warp::path::end())
        .and(warp::get())
        .and(with_store(store))
        .and_then(handlers::list_documents_handler);

    search.or(create).or(list)
}

/// GET /v1/models/info and GET /health
pub fn info_routes() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let model_info = warp::path("v1")
        .and(warp::path("models"))
        .and(warp::path("info"))
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handlers::model_info_handler);

    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handlers::health_handler);

    model_info.or(health)
}

fn with_store(
    store: DocumentStore,
) -> impl Filter<Extract = (DocumentStore,), Error = Infallible> + Clone {
    warp::any().map(move || store.clone())
}

fn with_agent(
    agent: Arc<Agent>,
) -> impl Filter<Extract = (Arc<Agent>,), Error = Infallible> + Clone {
    warp::any().map(move || agent.clone())
}
