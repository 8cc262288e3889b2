//! Mapping between audio queries and Gemini types

use std::path::Path;

use base64::Engine;

use crate::llm::core::{config::GenerationConfig, error::LlmError};

use super::types::{
    Blob, Content, GeminiGenerationConfig, GenerateContentRequest, GenerateContentResponse, Part,
};

/// Audio MIME type for a file, inferred from its extension
pub fn audio_mime_type(path: &Path) -> Result<&'static str, LlmError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let mime = match extension.as_str() {
        "wav" => "audio/wav",
        "mp3" => "audio/mp3",
        "flac" => "audio/flac",
        "ogg" => "audio/ogg",
        "aac" => "audio/aac",
        "m4a" => "audio/m4a",
        "opus" => "audio/opus",
        "aif" | "aiff" => "audio/aiff",
        "webm" => "audio/webm",
        _ => {
            return Err(LlmError::InvalidRequest(format!(
                "unsupported audio format: {}",
                path.display()
            )))
        }
    };
    Ok(mime)
}

/// Build a single-turn request carrying the audio inline, followed by the question
pub fn to_audio_request(
    audio: &[u8],
    mime_type: &str,
    question: &str,
    config: &GenerationConfig,
) -> GenerateContentRequest {
    let data = base64::engine::general_purpose::STANDARD.encode(audio);

    GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts: vec![
                Part::InlineData {
                    inline_data: Blob {
                        mime_type: mime_type.to_string(),
                        data,
                    },
                },
                Part::Text {
                    text: question.to_string(),
                },
            ],
        }],
        generation_config: Some(to_gemini_generation_config(config)),
    }
}

fn to_gemini_generation_config(config: &GenerationConfig) -> GeminiGenerationConfig {
    GeminiGenerationConfig {
        max_output_tokens: Some(config.max_tokens),
        temperature: config.temperature,
        top_p: config.top_p,
    }
}

/// Join the text parts of the first candidate
pub fn response_text(response: GenerateContentResponse) -> Result<String, LlmError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
            .unwrap_or_else(|| "no candidates returned".to_string());
        return Err(LlmError::ProviderError {
            code: "no_candidates".to_string(),
            message: reason,
        });
    };

    let text: String = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| match part {
            Part::Text { text } => Some(text),
            _ => None,
        })
        .collect();

    if text.is_empty() {
        return Err(LlmError::ProviderError {
            code: candidate
                .finish_reason
                .unwrap_or_else(|| "empty_response".to_string()),
            message: "model returned no text".to_string(),
        });
    }

    Ok(text)
}
