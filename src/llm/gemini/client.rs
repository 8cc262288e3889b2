//! Gemini client implementation

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::llm::auth::{AdcTokenSource, TokenSource};
use crate::llm::core::{client::LlmClient, config::GenerationConfig, error::LlmError};

use super::mapper::{audio_mime_type, response_text, to_audio_request};
use super::types::GenerateContentResponse;

/// Gemini model identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeminiModel {
    /// Gemini 2.5 Pro
    Gemini25Pro,
    /// Gemini 2.5 Flash
    Gemini25Flash,
    /// Gemini 2.5 Flash Lite
    Gemini25FlashLite,
}

impl GeminiModel {
    /// Get the model identifier string
    pub fn as_str(&self) -> &str {
        match self {
            GeminiModel::Gemini25Pro => "gemini-2.5-pro",
            GeminiModel::Gemini25Flash => "gemini-2.5-flash",
            GeminiModel::Gemini25FlashLite => "gemini-2.5-flash-lite",
        }
    }
}

impl FromStr for GeminiModel {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gemini-2.5-pro" => Ok(GeminiModel::Gemini25Pro),
            "gemini-2.5-flash" => Ok(GeminiModel::Gemini25Flash),
            "gemini-2.5-flash-lite" => Ok(GeminiModel::Gemini25FlashLite),
            other => Err(LlmError::InvalidRequest(format!("unknown Gemini model: {}", other))),
        }
    }
}

impl fmt::Display for GeminiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client for asking Gemini models on Vertex AI about audio
pub struct GeminiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Source of bearer tokens
    token_source: Box<dyn TokenSource>,
    /// GCP project ID
    project_id: String,
    /// GCP location (region)
    location: String,
    /// Model used when a query does not name one
    default_model: GeminiModel,
    /// Generation parameters sent with every request
    config: GenerationConfig,
}

impl GeminiClient {
    /// Create a new Gemini client authenticated with Application Default Credentials
    ///
    /// # Errors
    ///
    /// Returns an error if authentication initialization fails.
    pub async fn new(
        project_id: String,
        location: String,
        default_model: GeminiModel,
        config: GenerationConfig,
    ) -> Result<Self, LlmError> {
        let token_source = AdcTokenSource::new().await?;
        Self::with_token_source(
            Box::new(token_source),
            project_id,
            location,
            default_model,
            config,
        )
    }

    /// Create a client with an explicit token source
    pub fn with_token_source(
        token_source: Box<dyn TokenSource>,
        project_id: String,
        location: String,
        default_model: GeminiModel,
        config: GenerationConfig,
    ) -> Result<Self, LlmError> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| LlmError::HttpError {
                status: 0,
                body: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            token_source,
            project_id,
            location,
            default_model,
            config,
        })
    }

    /// Resolve the model for one query; blank names fall back to the default
    fn model_id<'a>(&'a self, model: Option<&'a str>) -> Result<&'a str, LlmError> {
        match model.map(str::trim) {
            None | Some("") => Ok(self.default_model.as_str()),
            Some(name) if name.contains(['/', ':', '?', '#']) => Err(LlmError::InvalidRequest(
                format!("invalid model name: {}", name),
            )),
            Some(name) => Ok(name),
        }
    }

    /// Build the `generateContent` endpoint URL
    fn build_endpoint_url(&self, model_id: &str) -> String {
        format!(
            "https://{}-aiplatform.googleapis.com/v1/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
            self.location, self.project_id, self.location, model_id
        )
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn audio_query(
        &self,
        audio_path: &Path,
        question: &str,
        model: Option<&str>,
    ) -> Result<String, LlmError> {
        tokio::fs::metadata(audio_path)
            .await
            .map_err(|e| LlmError::from_io(audio_path, e))?;

        let model_id = self.model_id(model)?;
        let mime_type = audio_mime_type(audio_path)?;

        let audio = tokio::fs::read(audio_path)
            .await
            .map_err(|e| LlmError::from_io(audio_path, e))?;

        debug!(
            path = %audio_path.display(),
            bytes = audio.len(),
            model = model_id,
            "Sending audio query to Gemini"
        );

        let request = to_audio_request(&audio, mime_type, question, &self.config);
        let token = self.token_source.token().await?;

        let response = self
            .http_client
            .post(self.build_endpoint_url(model_id))
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse::<u64>().ok())
                .map(Duration::from_secs);
            return Err(LlmError::RateLimitExceeded { retry_after });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        if let Some(usage) = &body.usage_metadata {
            debug!(
                input_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                "Gemini audio query completed"
            );
        }

        response_text(body)
    }
}
