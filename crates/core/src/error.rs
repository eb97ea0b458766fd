//! The search failure taxonomy.
//!
//! An adapter returning a syntactically valid but empty list is NOT an error;
//! the session treats it as a distinct no-data outcome.

use crate::ProviderKind;

/// A failure while resolving landmarks for a city.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// No credential configured for the selected provider. Raised before any
    /// network call is made.
    #[error("{} API Key is missing.", .0.display_name())]
    MissingKey(ProviderKind),

    /// Transport or authentication failure from a provider. Carries the
    /// provider's embedded error message when one was present.
    #[error("{message}")]
    Request {
        /// The provider that failed.
        provider: ProviderKind,
        /// Human-readable failure reason.
        message: String,
    },

    /// The provider replied, but the payload failed JSON parsing or schema
    /// validation.
    #[error("{} returned a malformed response: {reason}", provider.display_name())]
    Malformed {
        /// The provider that replied.
        provider: ProviderKind,
        /// What was wrong with the payload.
        reason: String,
    },
}

impl SearchError {
    /// The generic credential failure for a provider's transport errors.
    pub fn auth(provider: ProviderKind) -> Self {
        Self::Request {
            provider,
            message: format!(
                "{} search failed. Please check your API key.",
                provider.display_name()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_names_the_provider() {
        let err = SearchError::MissingKey(ProviderKind::Gemini);
        assert_eq!(err.to_string(), "Gemini API Key is missing.");
    }

    #[test]
    fn auth_failure_mentions_the_key() {
        let err = SearchError::auth(ProviderKind::Gemini);
        assert_eq!(
            err.to_string(),
            "Gemini search failed. Please check your API key."
        );
    }

    #[test]
    fn request_failure_uses_embedded_message() {
        let err = SearchError::Request {
            provider: ProviderKind::OpenAi,
            message: "Incorrect API key provided".into(),
        };
        assert_eq!(err.to_string(), "Incorrect API key provided");
    }
}
