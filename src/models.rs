// Request and response bodies of the HTTP API

use serde::{Deserialize, Serialize};

use crate::tools::ToolDeclaration;

// POST /tools/{name}/execute body
#[derive(Debug, Clone, Deserialize)]
pub struct ExecuteToolRequest {
    pub task_id: String,
    #[serde(default = "empty_parameters")]
    pub parameters: serde_json::Value,
}

fn empty_parameters() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

// GET /tools response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolListResponse {
    pub tools: Vec<ToolDeclaration>,
}

// GET /health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub tools: usize,
}
