//! Tool declaration helpers using JSON Schema generation

use schemars::{schema_for, JsonSchema};

use crate::llm::core::types::ToolDeclaration;

/// Create a tool declaration from a type that implements JsonSchema
///
/// The input schema is generated from the Rust argument type, so the
/// declared schema and the deserialization target can never drift apart.
/// Doc comments on the argument struct's fields become field descriptions
/// in the schema.
///
/// # Example
///
/// ```
/// use docbridge::llm::create_tool_declaration;
/// use schemars::JsonSchema;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, JsonSchema)]
/// struct SearchArgs {
///     /// Text that must appear in the document content
///     query: String,
/// }
///
/// let decl = create_tool_declaration::<SearchArgs>(
///     "search_documents",
///     "Search the document database",
/// );
/// assert_eq!(decl.name, "search_documents");
/// ```
pub fn create_tool_declaration<T: JsonSchema>(
    name: impl Into<String>,
    description: impl Into<String>,
) -> ToolDeclaration {
    let schema = schema_for!(T);
    ToolDeclaration {
        name: name.into(),
        description: description.into(),
        input_schema: serde_json::to_value(&schema)
            .expect("Failed to serialize schema - this is a bug in schemars or the JsonSchema impl"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, JsonSchema)]
    struct TestArgs {
        /// Text to look for
        query: String,
        /// Cap on the number of results
        limit: Option<u32>,
    }

    #[test]
    fn test_create_tool_declaration() {
        let decl = create_tool_declaration::<TestArgs>("test_tool", "A test tool");

        assert_eq!(decl.name, "test_tool");
        assert_eq!(decl.description, "A test tool");
        assert!(decl.input_schema.is_object());

        let schema_obj = decl.input_schema.as_object().unwrap();
        assert!(schema_obj.contains_key("properties"));
        assert!(schema_obj.contains_key("type"));
    }

    #[test]
    fn test_schema_marks_required_fields() {
        let decl = create_tool_declaration::<TestArgs>("test_tool", "A test tool");

        let required = decl.input_schema["required"].as_array().unwrap();
        assert!(required.contains(&serde_json::json!("query")));
        assert!(!required.contains(&serde_json::json!("limit")));
    }

    #[test]
    fn test_schema_includes_doc_comments() {
        let decl = create_tool_declaration::<TestArgs>("test", "test");

        let schema_str = serde_json::to_string_pretty(&decl.input_schema).unwrap();
        assert!(schema_str.contains("Text to look for"));
        assert!(schema_str.contains("Cap on the number of results"));
    }
}
