use std::fmt;

use async_trait::async_trait;

use crate::core::level::Level;
use crate::questions::types::Question;

/// Errors that can occur while fetching a round of questions.
/// The game does not branch on the variant — any failure is terminal for the
/// session — but the variants keep logs diagnosable.
#[derive(Debug)]
pub enum ProviderError {
    /// Provider misconfigured (missing API key, bad URL). Not retryable.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned an error response.
    Api { status: u16, message: String },
    /// The response body could not be turned into a valid round of questions.
    Payload(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Config(msg) => write!(f, "config error: {msg}"),
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ProviderError::Payload(msg) => write!(f, "payload error: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

#[async_trait]
pub trait QuestionProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Fetches a full round of questions for the given level.
    ///
    /// A successful return always holds exactly one round
    /// ([`crate::core::level::QUESTIONS_PER_LEVEL`] questions); anything the
    /// service sends back that cannot be validated into that shape is a
    /// [`ProviderError::Payload`].
    async fn fetch_questions(&self, level: Level) -> Result<Vec<Question>, ProviderError>;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_support::{CannedProvider, FailingProvider, test_round};

    #[tokio::test]
    async fn test_provider_as_trait_object() {
        let provider: Arc<dyn QuestionProvider> =
            Arc::new(CannedProvider { round: test_round(5) });
        let questions = provider.fetch_questions(Level::Level1).await.unwrap();
        assert_eq!(questions.len(), 5);
        assert_eq!(provider.name(), "canned");
    }

    #[tokio::test]
    async fn test_error_display_carries_detail() {
        let provider: Arc<dyn QuestionProvider> = Arc::new(FailingProvider);
        let err = provider.fetch_questions(Level::Level1).await.unwrap_err();
        assert_eq!(err.to_string(), "network error: connection refused");

        let api = ProviderError::Api { status: 429, message: "slow down".to_string() };
        assert_eq!(api.to_string(), "API error (HTTP 429): slow down");
    }
}
