//! Application Default Credentials (ADC) token source

use async_trait::async_trait;
use gcp_auth::AuthenticationManager;

use crate::llm::core::error::LlmError;

const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Supplies bearer tokens for Vertex AI requests
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Get an access token for the cloud platform scope
    async fn token(&self) -> Result<String, LlmError>;
}

/// Token source backed by `gcp_auth`
///
/// Supports multiple credential sources:
/// - `GOOGLE_APPLICATION_CREDENTIALS` environment variable
/// - User credentials from `gcloud auth application-default login`
/// - Metadata server (Compute Engine, Cloud Run, GKE)
///
/// Tokens are cached by `gcp_auth` and refreshed when expired.
pub struct AdcTokenSource {
    inner: AuthenticationManager,
}

impl AdcTokenSource {
    /// Discover credentials using the standard ADC flow
    ///
    /// # Errors
    /// Returns an error if no valid credentials can be found.
    pub async fn new() -> Result<Self, LlmError> {
        let inner = AuthenticationManager::new()
            .await
            .map_err(|e| LlmError::AuthenticationError(format!("Failed to initialize ADC: {}", e)))?;

        Ok(Self { inner })
    }
}

#[async_trait]
impl TokenSource for AdcTokenSource {
    async fn token(&self) -> Result<String, LlmError> {
        let token = self
            .inner
            .get_token(&[CLOUD_PLATFORM_SCOPE])
            .await
            .map_err(|e| LlmError::AuthenticationError(format!("Failed to get token: {}", e)))?;

        Ok(token.as_str().to_string())
    }
}

/// A fixed token, e.g. one printed by `gcloud auth print-access-token`
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl TokenSource for StaticToken {
    async fn token(&self) -> Result<String, LlmError> {
        if self.0.is_empty() {
            return Err(LlmError::AuthenticationError("empty access token".to_string()));
        }
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_token() {
        let source = StaticToken::new("ya29.test-token");
        assert_eq!(source.token().await.unwrap(), "ya29.test-token");
    }

    #[tokio::test]
    async fn test_empty_static_token_is_rejected() {
        let source = StaticToken::new("");
        let err = source.token().await.unwrap_err();
        assert!(matches!(err, LlmError::AuthenticationError(_)));
    }

    #[tokio::test]
    #[ignore] // Only run with valid credentials
    async fn test_adc_token() {
        let source = AdcTokenSource::new()
            .await
            .expect("Failed to initialize ADC token source");

        let token = source.token().await.expect("Failed to retrieve access token");

        assert!(
            token.len() > 20,
            "Token seems too short: {} characters",
            token.len()
        );
    }
}
