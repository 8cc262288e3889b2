use std::sync::Arc;

use audio_tool_server::config::ServerConfig;
use audio_tool_server::llm::create_client;
use audio_tool_server::routes::configure_routes;
use audio_tool_server::tools::{default_registry, TaskWorkspace};
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    let client = create_client(&config.llm).await?;
    let workspace = Arc::new(TaskWorkspace::new(config.workspace_root.clone()));
    let registry = Arc::new(default_registry(client, workspace)?);

    info!(
        workspace = %config.workspace_root.display(),
        tools = registry.len(),
        "Starting server on http://{}",
        config.addr
    );
    warp::serve(configure_routes(registry)).run(config.addr).await;
    Ok(())
}

fn init_logging() {
    let level = std::env::var("AUDIO_TOOL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(format!(
            "audio_tool_server={},hyper=warn,reqwest=warn",
            level
        ))
        .unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
