// GET /tools handler

use crate::models::ToolListResponse;
use crate::tools::ToolRegistry;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::debug;

pub async fn list_tools_handler(registry: Arc<ToolRegistry>) -> Result<impl warp::Reply, Infallible> {
    debug!("GET /tools");

    let response = ToolListResponse {
        tools: registry.declarations(),
    };
    Ok(warp::reply::json(&response))
}
