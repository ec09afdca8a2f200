//! Function registry for tool execution

use std::collections::HashMap;
use std::future::Future;

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::executor::ToolExecutor;

/// Type alias for boxed async tool functions
type AsyncToolFn =
    Box<dyn Fn(serde_json::Value) -> BoxFuture<'static, Result<String, String>> + Send + Sync>;

/// Registry of callable tool functions
///
/// Maps tool names to typed async functions. Arguments are deserialized
/// from the model's JSON before the call and results are serialized back
/// to JSON after it, so registered functions work with plain Rust types.
///
/// # Example
///
/// ```
/// use docbridge::llm::FunctionRegistry;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Deserialize)]
/// struct EchoArgs {
///     text: String,
/// }
///
/// #[derive(Serialize)]
/// struct EchoResult {
///     text: String,
/// }
///
/// let mut registry = FunctionRegistry::new();
/// registry.register_async("echo", |args: EchoArgs| async move {
///     Ok(EchoResult { text: args.text })
/// });
/// assert!(registry.contains("echo"));
/// ```
pub struct FunctionRegistry {
    functions: HashMap<String, AsyncToolFn>,
}

impl FunctionRegistry {
    /// Create a new empty function registry
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Register an async function under a tool name
    ///
    /// The name must match a declared tool; the argument type must mirror
    /// the declared input schema.
    pub fn register_async<F, Args, R, Fut>(&mut self, name: impl Into<String>, func: F)
    where
        F: Fn(Args) -> Fut + Send + Sync + 'static,
        Args: DeserializeOwned + Send + 'static,
        R: Serialize + Send + 'static,
        Fut: Future<Output = Result<R, String>> + Send + 'static,
    {
        let wrapper = move |args_json: serde_json::Value| {
            let args = match serde_json::from_value::<Args>(args_json) {
                Ok(args) => args,
                Err(e) => {
                    let err_msg = format!("Failed to deserialize arguments: {}", e);
                    return Box::pin(async move { Err(err_msg) }) as BoxFuture<'static, _>;
                }
            };

            let future = func(args);

            Box::pin(async move {
                match future.await {
                    Ok(result) => serde_json::to_string(&result)
                        .map_err(|e| format!("Failed to serialize result: {}", e)),
                    Err(e) => Err(e),
                }
            }) as BoxFuture<'static, _>
        };

        self.functions.insert(name.into(), Box::new(wrapper));
    }

    /// Check if a function is registered
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Get the number of registered functions
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Names of all registered functions, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    async fn execute_function(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<String, String> {
        match self.functions.get(name) {
            Some(func) => func(arguments).await,
            None => Err(format!("Unknown tool: {}", name)),
        }
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolExecutor for FunctionRegistry {
    async fn execute(
        &self,
        _tool_call_id: String,
        name: String,
        arguments: serde_json::Value,
    ) -> Result<String, String> {
        self.execute_function(&name, arguments).await
    }
}
