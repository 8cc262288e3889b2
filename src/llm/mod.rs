//! LLM Abstraction Layer
//!
//! This module defines the client capability the tools depend on and a
//! Google Gemini implementation hosted on Google Cloud Platform's Vertex AI.

pub mod auth;
pub mod core;
pub mod gemini;

// Re-export commonly used types
pub use self::core::{
    client::{create_client, DisabledClient, LlmClient},
    config::{GenerationConfig, LlmConfig, LlmProvider},
    error::LlmError,
};

pub use gemini::{GeminiClient, GeminiModel};
