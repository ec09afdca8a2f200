//! Data types for document store operations

pub mod document;

pub use document::{Document, NewDocument};
