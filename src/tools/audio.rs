//! Audio analysis tool
//!
//! Forwards a task-relative audio file and a question to the configured
//! LLM client and reports the answer in the tool envelope.

use std::sync::Arc;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use thiserror::Error;

use super::declaration::{create_tool_declaration, ToolDeclaration};
use super::handler::ToolHandler;
use super::response::ToolResponse;
use super::workspace::PathResolver;
use crate::llm::{LlmClient, LlmError};

pub const NAME: &str = "audio_analysis";

pub const DEFAULT_QUESTION: &str = "Please describe the content of this audio.";

/// Parameters of the audio analysis tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AudioArgs {
    /// Audio file path, relative to the task directory
    pub audio_path: Option<String>,
    /// Question to ask about the audio
    pub question: Option<String>,
    /// Model name; the client's configured model is used when omitted
    pub model: Option<String>,
}

/// Failures reported by the audio analysis tool
#[derive(Debug, Error)]
pub enum AudioToolError {
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("audio analysis is not yet implemented")]
    NotImplemented,

    #[error("audio file not found: {0}")]
    FileNotFound(String),

    #[error("audio analysis failed: {0}")]
    Analysis(LlmError),

    #[error("execution failed: {0}")]
    Execution(String),
}

impl From<LlmError> for AudioToolError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::NotImplemented(_) => AudioToolError::NotImplemented,
            LlmError::FileNotFound { path } => AudioToolError::FileNotFound(path.display().to_string()),
            other => AudioToolError::Analysis(other),
        }
    }
}

/// Answers questions about audio files through an LLM client
pub struct AudioAnalysisHandler {
    client: Arc<dyn LlmClient>,
    paths: Arc<dyn PathResolver>,
}

impl AudioAnalysisHandler {
    pub fn new(client: Arc<dyn LlmClient>, paths: Arc<dyn PathResolver>) -> Self {
        Self { client, paths }
    }

    async fn analyze(
        &self,
        task_id: &str,
        parameters: serde_json::Value,
    ) -> Result<String, AudioToolError> {
        let args: AudioArgs = serde_json::from_value(parameters)
            .map_err(|e| AudioToolError::Execution(e.to_string()))?;

        let audio_path = match args.audio_path.as_deref() {
            Some(path) if !path.is_empty() => path,
            _ => return Err(AudioToolError::MissingParameter("audio_path")),
        };
        let question = args.question.as_deref().unwrap_or(DEFAULT_QUESTION);

        let abs_path = self
            .paths
            .resolve(task_id, audio_path)
            .map_err(|e| AudioToolError::Execution(e.to_string()))?;

        let answer = self
            .client
            .audio_query(&abs_path, question, args.model.as_deref())
            .await?;
        Ok(answer)
    }
}

#[async_trait]
impl ToolHandler for AudioAnalysisHandler {
    fn name(&self) -> &str {
        NAME
    }

    fn declaration(&self) -> ToolDeclaration {
        let mut declaration = create_tool_declaration::<AudioArgs>(
            NAME,
            "Answer a question about an audio file in the task directory",
        );
        // audio_path is optional in AudioArgs so its absence can be reported
        // as a tool error, but callers must always send it.
        if let Some(schema) = declaration.input_schema.as_object_mut() {
            schema.insert("required".to_string(), serde_json::json!(["audio_path"]));
        }
        declaration
    }

    async fn execute(&self, task_id: &str, parameters: serde_json::Value) -> ToolResponse {
        match self.analyze(task_id, parameters).await {
            Ok(output) => ToolResponse::success(output),
            Err(err) => ToolResponse::error(err.to_string()),
        }
    }
}
