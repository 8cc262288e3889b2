//! Tool execution framework
//!
//! Tools take a task id and a JSON parameter object and always answer with a
//! `ToolResponse` envelope. The `ToolRegistry` dispatches to them by name.

pub mod audio;
pub mod declaration;
pub mod handler;
pub mod registry;
pub mod response;
pub mod workspace;

use std::sync::Arc;

use crate::llm::LlmClient;

// Re-export commonly used types
pub use audio::AudioAnalysisHandler;
pub use declaration::{create_tool_declaration, ToolDeclaration};
pub use handler::ToolHandler;
pub use registry::{RegistryError, ToolRegistry};
pub use response::{ToolResponse, ToolStatus};
pub use workspace::{PathResolver, TaskWorkspace, WorkspaceError};

/// Registry holding every tool this server ships
pub fn default_registry(
    client: Arc<dyn LlmClient>,
    paths: Arc<dyn PathResolver>,
) -> Result<ToolRegistry, RegistryError> {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(AudioAnalysisHandler::new(client, paths)))?;
    Ok(registry)
}
