// HTTP gateway modules
pub mod handlers;
pub mod models;
pub mod routes;

// Document store client library
pub mod document_store;

// LLM abstraction layer
pub mod llm;

// Document tools exposed to the agent
pub mod agent_tools;
