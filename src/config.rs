//! Server configuration from environment variables

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use crate::llm::{GeminiModel, GenerationConfig, LlmConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything `main` needs to start the server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Parent directory of all task directories
    pub workspace_root: PathBuf,
    pub llm: LlmConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &'static str| lookup(name).filter(|value| !value.trim().is_empty());

        let host: IpAddr = parse_or(&var, "TOOL_SERVER_HOST", IpAddr::from([127, 0, 0, 1]))?;
        let port: u16 = parse_or(&var, "TOOL_SERVER_PORT", 3030)?;
        let workspace_root = var("TOOL_WORKSPACE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./workspace"));

        let max_tokens: u32 = parse_or(&var, "LLM_MAX_TOKENS", 1024)?;
        let generation = GenerationConfig::new(max_tokens);

        let provider = var("LLM_PROVIDER").unwrap_or_else(|| "gemini".to_string());
        let llm = match provider.as_str() {
            "gemini" => {
                let project_id = var("GCP_PROJECT_ID").ok_or(ConfigError::Missing("GCP_PROJECT_ID"))?;
                let location = var("GCP_LOCATION").unwrap_or_else(|| "us-central1".to_string());
                let model = match var("GEMINI_MODEL") {
                    Some(name) => name.parse::<GeminiModel>().map_err(|e| ConfigError::Invalid {
                        name: "GEMINI_MODEL",
                        value: name.clone(),
                        reason: e.to_string(),
                    })?,
                    None => GeminiModel::Gemini25Flash,
                };
                LlmConfig::gemini(project_id, location, model)
            }
            "disabled" => LlmConfig::disabled(),
            other => {
                return Err(ConfigError::Invalid {
                    name: "LLM_PROVIDER",
                    value: other.to_string(),
                    reason: "expected \"gemini\" or \"disabled\"".to_string(),
                })
            }
        };

        Ok(Self {
            addr: SocketAddr::new(host, port),
            workspace_root,
            llm: llm.with_generation(generation),
        })
    }
}

fn parse_or<T, F>(var: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&'static str) -> Option<String>,
{
    match var(name) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            value,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
