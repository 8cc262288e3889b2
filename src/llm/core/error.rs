//! Error types for the LLM layer

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when querying an LLM client
#[derive(Debug, Error)]
pub enum LlmError {
    /// The client does not support the requested capability
    #[error("{0} is not implemented by this client")]
    NotImplemented(&'static str),

    /// The referenced input file does not exist
    #[error("{}", path.display())]
    FileNotFound { path: PathBuf },

    /// Reading an input file failed for a reason other than absence
    #[error("I/O error reading {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// Authentication/token issues
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// HTTP request failures
    #[error("HTTP error (status {status}): {body}")]
    HttpError { status: u16, body: String },

    /// JSON encoding/decoding issues
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded (retry after {retry_after:?})")]
    RateLimitExceeded { retry_after: Option<Duration> },

    /// Provider-specific errors
    #[error("Provider error ({code}): {message}")]
    ProviderError { code: String, message: String },

    /// Failure reported by a client with no more specific category
    #[error("{0}")]
    Other(String),
}

impl LlmError {
    /// Classify an I/O error raised while reading `path`
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            LlmError::FileNotFound { path }
        } else {
            LlmError::Io {
                path,
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            LlmError::HttpError {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            LlmError::HttpError {
                status: 0,
                body: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_error() {
        let err = LlmError::NotImplemented("audio_query");
        assert_eq!(err.to_string(), "audio_query is not implemented by this client");
    }

    #[test]
    fn test_file_not_found_displays_path() {
        let err = LlmError::FileNotFound {
            path: PathBuf::from("/work/task1/clip.wav"),
        };
        assert_eq!(err.to_string(), "/work/task1/clip.wav");
    }

    #[test]
    fn test_from_io_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = LlmError::from_io("/tmp/missing.wav", io);
        assert!(matches!(err, LlmError::FileNotFound { .. }));
    }

    #[test]
    fn test_from_io_other_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = LlmError::from_io("/tmp/locked.wav", io);
        match err {
            LlmError::Io { path, message } => {
                assert_eq!(path, PathBuf::from("/tmp/locked.wav"));
                assert!(message.contains("denied"));
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_http_error() {
        let err = LlmError::HttpError {
            status: 404,
            body: "Not found".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Not found"));
    }

    #[test]
    fn test_rate_limit_error() {
        let err = LlmError::RateLimitExceeded {
            retry_after: Some(Duration::from_secs(60)),
        };
        assert!(err.to_string().contains("Rate limit exceeded"));
    }

    #[test]
    fn test_other_error_is_bare_message() {
        let err = LlmError::Other("boom".to_string());
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_from_serde_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let llm_err: LlmError = json_err.into();
        assert!(matches!(llm_err, LlmError::SerializationError(_)));
    }
}
