use serde::{Deserialize, Serialize};

/// Document data for insertion into the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDocument {
    /// Document title
    pub title: String,

    /// Document body, arbitrary length
    pub content: String,

    /// Opaque metadata blob; the store never interprets it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

impl NewDocument {
    /// Create a new document payload
    ///
    /// # Example
    ///
    /// ```
    /// use docbridge::document_store::NewDocument;
    ///
    /// let doc = NewDocument::new("Cloud Computing", "On-demand compute resources.")
    ///     .with_metadata(r#"{"category": "technology"}"#);
    /// ```
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            metadata: None,
        }
    }

    /// Attach a metadata blob (builder pattern)
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }
}

/// Document record read from the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier, assigned by the database on creation
    pub id: i64,

    /// Document title
    pub title: String,

    /// Document body
    pub content: String,

    /// Opaque metadata blob, if any
    pub metadata: Option<String>,
}
