//! Document tools exposed to the agent
//!
//! Adapts the document store's three operations into named, schema-typed
//! functions the model can call. The adapter does nothing beyond invoking
//! the store and reshaping rows into the declared output records; it
//! assumes nothing about how often or in what order the model calls them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::document_store::{Document, DocumentStore, NewDocument};
use crate::llm::{create_tool_declaration, FunctionRegistry, ToolDeclaration};

/// Arguments for the `search_documents` tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchDocumentsArgs {
    /// Text that must appear in the document content (case-sensitive)
    pub query: String,
}

/// Arguments for the `list_documents` tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListDocumentsArgs {}

/// Arguments for the `add_document` tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddDocumentArgs {
    /// Document title
    pub title: String,
    /// Document body text
    pub content: String,
    /// Optional metadata blob, stored verbatim
    #[serde(default)]
    pub metadata: Option<String>,
}

/// Document shape returned by every tool
#[derive(Debug, Clone, Serialize)]
pub struct DocumentRecord {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub metadata: Option<String>,
}

impl From<Document> for DocumentRecord {
    fn from(doc: Document) -> Self {
        Self {
            id: doc.id,
            title: doc.title,
            content: doc.content,
            metadata: doc.metadata,
        }
    }
}

/// Declarations for the three document tools, in the order they are
/// registered
pub fn document_tool_declarations() -> Vec<ToolDeclaration> {
    vec![
        create_tool_declaration::<SearchDocumentsArgs>(
            "search_documents",
            "Search the document database for documents whose content contains the query text.",
        ),
        create_tool_declaration::<ListDocumentsArgs>(
            "list_documents",
            "Retrieve all documents from the document database.",
        ),
        create_tool_declaration::<AddDocumentArgs>(
            "add_document",
            "Add a new document to the document database.",
        ),
    ]
}

/// Register the three document tools against a store
///
/// Each closure clones the store handle; all clones share one pool.
pub fn register_document_tools(registry: &mut FunctionRegistry, store: DocumentStore) {
    let search_store = store.clone();
    registry.register_async("search_documents", move |args: SearchDocumentsArgs| {
        let store = search_store.clone();
        async move {
            store
                .search_documents(&args.query)
                .await
                .map(into_records)
                .map_err(|e| e.to_string())
        }
    });

    let list_store = store.clone();
    registry.register_async("list_documents", move |_args: ListDocumentsArgs| {
        let store = list_store.clone();
        async move {
            store
                .get_all_documents()
                .await
                .map(into_records)
                .map_err(|e| e.to_string())
        }
    });

    registry.register_async("add_document", move |args: AddDocumentArgs| {
        let store = store.clone();
        async move {
            let mut doc = NewDocument::new(args.title, args.content);
            if let Some(metadata) = args.metadata {
                doc = doc.with_metadata(metadata);
            }

            store
                .create_document(doc)
                .await
                .map(DocumentRecord::from)
                .map_err(|e| e.to_string())
        }
    });
}

fn into_records(docs: Vec<Document>) -> Vec<DocumentRecord> {
    docs.into_iter().map(DocumentRecord::from).collect()
}
