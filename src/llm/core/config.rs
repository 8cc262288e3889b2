//! Client and generation configuration

use serde::{Deserialize, Serialize};

use crate::llm::gemini::GeminiModel;

/// Which backend answers audio queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmProvider {
    /// Gemini on Vertex AI
    Gemini {
        /// GCP project ID
        project_id: String,
        /// GCP location (region)
        location: String,
        /// Model used when a request does not name one
        default_model: GeminiModel,
    },
    /// No backend; audio queries report the capability as not implemented
    Disabled,
}

/// Settings handed to the client factory
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    pub generation: GenerationConfig,
}

impl LlmConfig {
    /// Configuration for a Gemini backend with default generation parameters
    pub fn gemini(
        project_id: impl Into<String>,
        location: impl Into<String>,
        default_model: GeminiModel,
    ) -> Self {
        Self {
            provider: LlmProvider::Gemini {
                project_id: project_id.into(),
                location: location.into(),
                default_model,
            },
            generation: GenerationConfig::default(),
        }
    }

    /// Configuration with no backend
    pub fn disabled() -> Self {
        Self {
            provider: LlmProvider::Disabled,
            generation: GenerationConfig::default(),
        }
    }

    /// Replace the generation parameters
    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }
}

/// Parameters for controlling text generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Randomness (0.0-1.0, higher = more random)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Nucleus sampling threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

impl GenerationConfig {
    /// Create a new configuration with the specified max tokens
    pub fn new(max_tokens: u32) -> Self {
        Self {
            max_tokens,
            temperature: None,
            top_p: None,
        }
    }

    /// Set the temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the top_p value
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(1024)
    }
}
