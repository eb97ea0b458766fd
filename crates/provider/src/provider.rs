//! Unified provider enum with one variant per backend.
//!
//! Selected once at the session boundary from the configured `ProviderKind`;
//! downstream code dispatches through `LandmarkSource` instead of branching
//! on the provider id.

use crate::{Gemini, OpenAi, parse};
use acore::{Landmark, ProviderKind, SearchError};
use reqwest::Client;

/// A source of landmark records for a city.
///
/// One outbound network call per invocation; results are schema-validated
/// and carry caller-assigned identities.
pub trait LandmarkSource {
    /// Find literary landmarks for a city.
    fn find_landmarks(
        &self,
        city: &str,
    ) -> impl Future<Output = Result<Vec<Landmark>, SearchError>> + Send;
}

/// Unified AI provider.
#[derive(Clone, Debug)]
pub enum Provider {
    /// Google Gemini, native generateContent transport.
    Gemini(Gemini),
    /// OpenAI chat completions.
    OpenAi(OpenAi),
    /// DeepSeek chat completions.
    DeepSeek(OpenAi),
}

impl Provider {
    /// Construct the provider for a backend from its credential and a shared
    /// HTTP client. A blank credential fails here, before any network call.
    pub fn build(kind: ProviderKind, key: &str, client: Client) -> Result<Self, SearchError> {
        if key.trim().is_empty() {
            return Err(SearchError::MissingKey(kind));
        }
        match kind {
            ProviderKind::Gemini => Gemini::new(client, key).map(Self::Gemini),
            ProviderKind::OpenAi => OpenAi::api(client, key).map(Self::OpenAi),
            ProviderKind::DeepSeek => OpenAi::deepseek(client, key).map(Self::DeepSeek),
        }
    }

    /// Which backend this provider fronts.
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Gemini(_) => ProviderKind::Gemini,
            Self::OpenAi(_) => ProviderKind::OpenAi,
            Self::DeepSeek(_) => ProviderKind::DeepSeek,
        }
    }

    /// The Gemini adapter, when this provider is Gemini. Grounded lookup and
    /// the darkroom filter are Gemini-only capabilities.
    pub fn as_gemini(&self) -> Option<&Gemini> {
        match self {
            Self::Gemini(gemini) => Some(gemini),
            _ => None,
        }
    }
}

impl LandmarkSource for Provider {
    async fn find_landmarks(&self, city: &str) -> Result<Vec<Landmark>, SearchError> {
        let mut records = match self {
            Self::Gemini(p) => p.find_landmarks(city).await?,
            Self::OpenAi(p) | Self::DeepSeek(p) => p.find_landmarks(city).await?,
        };
        parse::assign_identities(&mut records, self.kind(), city);
        Ok(records)
    }
}
