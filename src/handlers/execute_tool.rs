// POST /tools/{name}/execute handler

use crate::models::ExecuteToolRequest;
use crate::tools::{ToolRegistry, ToolResponse};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use warp::http::StatusCode;

pub async fn execute_tool_handler(
    name: String,
    request: ExecuteToolRequest,
    registry: Arc<ToolRegistry>,
) -> Result<impl warp::Reply, Infallible> {
    let request_id = Uuid::new_v4();
    info!(%request_id, tool = %name, task_id = %request.task_id, "POST /tools/{}/execute", name);

    if !registry.contains(&name) {
        let response = ToolResponse::error(format!("unknown tool: {}", name));
        return Ok(warp::reply::with_status(
            warp::reply::json(&response),
            StatusCode::NOT_FOUND,
        ));
    }

    let response = registry
        .execute(&name, &request.task_id, request.parameters)
        .await;

    Ok(warp::reply::with_status(
        warp::reply::json(&response),
        StatusCode::OK,
    ))
}
