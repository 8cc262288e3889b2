// Route definitions

use crate::handlers;
use crate::tools::ToolRegistry;
use std::convert::Infallible;
use std::sync::Arc;
use warp::Filter;

const MAX_BODY_BYTES: u64 = 64 * 1024;

pub fn configure_routes(
    registry: Arc<ToolRegistry>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let api = warp::path("api").and(warp::path("v1"));

    // GET /api/v1/tools
    let list_tools = api
        .and(warp::path("tools"))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_registry(registry.clone()))
        .and_then(handlers::list_tools_handler);

    // POST /api/v1/tools/{name}/execute
    let execute_tool = api
        .and(warp::path("tools"))
        .and(warp::path::param::<String>())
        .and(warp::path("execute"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(with_registry(registry.clone()))
        .and_then(handlers::execute_tool_handler)
        .recover(handlers::body_rejection_handler);

    // GET /health
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_registry(registry))
        .and_then(handlers::health_handler);

    list_tools.or(execute_tool).or(health)
}

fn with_registry(
    registry: Arc<ToolRegistry>,
) -> impl Filter<Extract = (Arc<ToolRegistry>,), Error = Infallible> + Clone {
    warp::any().map(move || registry.clone())
}
