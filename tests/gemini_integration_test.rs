//! Integration tests for the Gemini client
//!
//! These tests require valid GCP credentials and will make real API calls.
//! To run these tests:
//! 1. Create a `.env` with `GCP_PROJECT_ID` (and optionally `GCP_LOCATION`)
//! 2. Set `AUDIO_SAMPLE_PATH` to a short .wav/.mp3 file
//! 3. Ensure you have valid credentials (run `gcloud auth application-default login`)
//! 4. Run: `cargo test --test gemini_integration_test -- --ignored`

use std::env;
use std::path::PathBuf;

use audio_tool_server::llm::{GeminiClient, GeminiModel, GenerationConfig, LlmClient, LlmError};

/// Helper to create a test client
async fn create_test_client() -> GeminiClient {
    dotenvy::dotenv().ok();

    let project_id = env::var("GCP_PROJECT_ID").expect("GCP_PROJECT_ID required in .env");
    let location = env::var("GCP_LOCATION").unwrap_or_else(|_| "us-central1".to_string());

    GeminiClient::new(
        project_id,
        location,
        GeminiModel::Gemini25Flash,
        GenerationConfig::new(256),
    )
    .await
    .expect("Failed to create Gemini client")
}

#[tokio::test]
#[ignore] // Run with --ignored flag
async fn test_gemini_audio_query() {
    let client = create_test_client().await;
    let sample = PathBuf::from(env::var("AUDIO_SAMPLE_PATH").expect("AUDIO_SAMPLE_PATH required"));

    let answer = client
        .audio_query(&sample, "Describe this audio in one sentence.", None)
        .await
        .expect("Audio query failed");

    println!("Gemini answer: {}", answer);
    assert!(!answer.trim().is_empty());
}

#[tokio::test]
#[ignore] // Run with --ignored flag
async fn test_gemini_audio_query_missing_file() {
    let client = create_test_client().await;

    let err = client
        .audio_query(
            &PathBuf::from("/nonexistent/clip.wav"),
            "What is this?",
            Some("gemini-2.5-flash-lite"),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::FileNotFound { .. }));
}
