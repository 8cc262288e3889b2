//! Gemini provider implementation
//!
//! This module provides a client for asking Google's Gemini models on
//! Vertex AI about audio files, implementing the LlmClient trait.

pub mod client;
pub mod mapper;
pub mod types;

// Re-export main types for convenience
pub use client::{GeminiClient, GeminiModel};
