//! Tool registry and dispatch

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::declaration::ToolDeclaration;
use super::handler::ToolHandler;
use super::response::ToolResponse;

/// Errors raised while building a registry
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("tool already registered: {0}")]
    Duplicate(String),
}

/// Registry of the tools a server exposes, keyed by name
///
/// # Example
///
/// ```ignore
/// let mut registry = ToolRegistry::new();
/// registry.register(Arc::new(AudioAnalysisHandler::new(client, workspace)))?;
///
/// let response = registry
///     .execute("audio_analysis", "task1", json!({"audio_path": "clip.wav"}))
///     .await;
/// ```
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool under its own name
    pub fn register(&mut self, tool: Arc<dyn ToolHandler>) -> Result<(), RegistryError> {
        let name = tool.name().to_string();
        if self.tools.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }
        debug!(tool = %name, "Registered tool");
        self.tools.insert(name, tool);
        Ok(())
    }

    /// Check if a tool is registered
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Declarations of all registered tools, sorted by name
    pub fn declarations(&self) -> Vec<ToolDeclaration> {
        let mut declarations: Vec<_> = self.tools.values().map(|tool| tool.declaration()).collect();
        declarations.sort_by(|a, b| a.name.cmp(&b.name));
        declarations
    }

    /// Execute a registered tool by name
    ///
    /// Unknown names produce an error envelope rather than a Rust error.
    pub async fn execute(
        &self,
        name: &str,
        task_id: &str,
        parameters: serde_json::Value,
    ) -> ToolResponse {
        let Some(tool) = self.tools.get(name) else {
            warn!(tool = name, task_id, "Unknown tool requested");
            return ToolResponse::error(format!("unknown tool: {}", name));
        };

        let response = tool.execute(task_id, parameters).await;
        if response.is_success() {
            info!(tool = name, task_id, "Tool execution succeeded");
        } else {
            info!(tool = name, task_id, error = %response.error, "Tool execution failed");
        }
        response
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::declaration::create_tool_declaration;
    use async_trait::async_trait;
    use schemars::JsonSchema;
    use serde::Deserialize;

    #[derive(Deserialize, JsonSchema)]
    struct EchoArgs {
        text: String,
    }

    struct EchoTool {
        name: &'static str,
    }

    #[async_trait]
    impl ToolHandler for EchoTool {
        fn name(&self) -> &str {
            self.name
        }

        fn declaration(&self) -> ToolDeclaration {
            create_tool_declaration::<EchoArgs>(self.name, "Echo text back")
        }

        async fn execute(&self, task_id: &str, parameters: serde_json::Value) -> ToolResponse {
            match serde_json::from_value::<EchoArgs>(parameters) {
                Ok(args) => ToolResponse::success(format!("{}: {}", task_id, args.text)),
                Err(e) => ToolResponse::error(e.to_string()),
            }
        }
    }

    fn registry_with(names: &[&'static str]) -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        for &name in names {
            registry.register(Arc::new(EchoTool { name })).unwrap();
        }
        registry
    }

    #[test]
    fn test_register() {
        let registry = registry_with(&["echo"]);
        assert!(registry.contains("echo"));
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_duplicate_registration() {
        let mut registry = registry_with(&["echo"]);
        let err = registry.register(Arc::new(EchoTool { name: "echo" })).unwrap_err();
        assert_eq!(err.to_string(), "tool already registered: echo");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_declarations_are_sorted() {
        let registry = registry_with(&["zeta", "alpha"]);
        let names: Vec<_> = registry.declarations().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[tokio::test]
    async fn test_execute_dispatches_by_name() {
        let registry = registry_with(&["echo"]);
        let response = registry
            .execute("echo", "task1", serde_json::json!({"text": "hello"}))
            .await;
        assert_eq!(response, ToolResponse::success("task1: hello"));
    }

    #[tokio::test]
    async fn test_execute_passes_through_error_envelope() {
        let registry = registry_with(&["echo"]);
        let response = registry.execute("echo", "task1", serde_json::json!({})).await;
        assert!(!response.is_success());
        assert!(response.error.contains("text"));
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let registry = ToolRegistry::new();
        let response = registry.execute("missing", "task1", serde_json::json!({})).await;
        assert_eq!(response, ToolResponse::error("unknown tool: missing"));
    }
}
