//! Tool handler trait

use async_trait::async_trait;

use super::declaration::ToolDeclaration;
use super::response::ToolResponse;

/// A tool the server can execute on behalf of a task
///
/// Implementations never fail: every error is reported inside the returned
/// `ToolResponse`.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Name used to dispatch to this tool
    fn name(&self) -> &str;

    /// Declaration advertised to callers
    fn declaration(&self) -> ToolDeclaration;

    /// Execute the tool
    ///
    /// # Arguments
    ///
    /// * `task_id` - Task whose working directory scopes relative paths
    /// * `parameters` - Tool parameters as a JSON value
    async fn execute(&self, task_id: &str, parameters: serde_json::Value) -> ToolResponse;
}
