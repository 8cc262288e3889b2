//! The `{status, output, error}` envelope every tool returns

use serde::{Deserialize, Serialize};

/// Outcome of a tool execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Success,
    Error,
}

/// Uniform result of a tool execution
///
/// Both text fields are always present. On success `error` is empty; on
/// failure `output` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub status: ToolStatus,
    pub output: String,
    pub error: String,
}

impl ToolResponse {
    /// Successful result carrying `output` as given
    ///
    /// An empty `output` is kept, leaving both text fields empty.
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            status: ToolStatus::Success,
            output: output.into(),
            error: String::new(),
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            status: ToolStatus::Error,
            output: String::new(),
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ToolStatus::Success
    }
}
