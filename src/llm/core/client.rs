//! Client trait for LLM implementations

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use super::config::{LlmConfig, LlmProvider};
use super::error::LlmError;
use crate::llm::gemini::GeminiClient;

/// Interface that LLM client implementations satisfy
///
/// Clients are shared between concurrent tool executions through `Arc`, so
/// implementations must be safe to call from several tasks at once.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Ask a question about an audio file
    ///
    /// # Arguments
    /// * `audio_path` - Absolute path of the audio file
    /// * `question` - Natural-language question about the audio
    /// * `model` - Model identifier, or `None` for the client's default
    ///
    /// # Errors
    /// * `LlmError::NotImplemented` if the client has no audio support
    /// * `LlmError::FileNotFound` if `audio_path` does not exist
    ///
    /// Clients without audio support can rely on the default implementation.
    async fn audio_query(
        &self,
        audio_path: &Path,
        question: &str,
        model: Option<&str>,
    ) -> Result<String, LlmError> {
        let _ = (audio_path, question, model);
        Err(LlmError::NotImplemented("audio_query"))
    }
}

/// Client used when no LLM backend is configured
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledClient;

#[async_trait]
impl LlmClient for DisabledClient {}

/// Create an LLM client from configuration
///
/// # Example
///
/// ```rust,no_run
/// use audio_tool_server::llm::{create_client, GeminiModel, LlmConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = create_client(&LlmConfig::gemini(
///     "my-project",
///     "us-central1",
///     GeminiModel::Gemini25Flash,
/// ))
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn create_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    match &config.provider {
        LlmProvider::Gemini {
            project_id,
            location,
            default_model,
        } => {
            let client = GeminiClient::new(
                project_id.clone(),
                location.clone(),
                default_model.clone(),
                config.generation.clone(),
            )
            .await?;
            Ok(Arc::new(client))
        }
        LlmProvider::Disabled => Ok(Arc::new(DisabledClient)),
    }
}
