// GET /health handler

use crate::models::HealthResponse;
use crate::tools::ToolRegistry;
use std::convert::Infallible;
use std::sync::Arc;

pub async fn health_handler(registry: Arc<ToolRegistry>) -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&HealthResponse {
        status: "ok".to_string(),
        tools: registry.len(),
    }))
}
