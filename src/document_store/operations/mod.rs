//! Document store operations
//!
//! Free functions over a connection pool. Each operation checks a
//! connection out of the pool for the duration of a single call and
//! releases it on every exit path.

pub mod insert;
pub mod query;
pub mod schema;

pub use insert::create_document;
pub use query::{get_all_documents, search_documents};
pub use schema::init_documents_table;
