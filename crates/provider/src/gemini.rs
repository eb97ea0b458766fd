//! Gemini provider: native `generateContent` transport.
//!
//! Landmark search runs against the flash model with the Google Search tool
//! enabled so answers are grounded in current information, and a strict
//! response schema so the reply is a raw JSON array. Grounded place lookup
//! uses the Google Maps tool instead.

use crate::{parse, prompt};
use acore::{Grounding, Landmark, ProviderKind, SearchError};
use reqwest::{
    Client, Method,
    header::{self, HeaderMap, HeaderValue},
};
use serde::Deserialize;
use serde_json::{Value, json};

const BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Model used for landmark search and grounded lookups.
pub const SEARCH_MODEL: &str = "gemini-2.5-flash";
/// Image-capable model used by the darkroom filter.
pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// The Gemini provider.
#[derive(Clone, Debug)]
pub struct Gemini {
    /// The HTTP client.
    pub(crate) client: Client,
    /// Request headers (API key, content-type).
    pub(crate) headers: HeaderMap,
}

impl Gemini {
    /// Create a provider authenticated with an API key.
    pub fn new(client: Client, key: &str) -> Result<Self, SearchError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            key.parse().map_err(|_| SearchError::auth(ProviderKind::Gemini))?,
        );
        Ok(Self { client, headers })
    }

    /// Issue one `generateContent` call and return the raw response.
    pub(crate) async fn generate(
        &self,
        model: &str,
        body: &Value,
    ) -> Result<GenerateResponse, SearchError> {
        tracing::debug!("gemini request: {body}");
        let response = self
            .client
            .request(Method::POST, format!("{BASE}/{model}:generateContent"))
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("gemini transport failure: {e}");
                SearchError::auth(ProviderKind::Gemini)
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|_| SearchError::auth(ProviderKind::Gemini))?;
        tracing::debug!("gemini response ({status}): {text}");
        if !status.is_success() {
            return Err(SearchError::auth(ProviderKind::Gemini));
        }
        serde_json::from_str(&text).map_err(|e| SearchError::Malformed {
            provider: ProviderKind::Gemini,
            reason: e.to_string(),
        })
    }

    /// Find literary landmarks in a city.
    ///
    /// An empty or missing text payload yields an empty list, not an error.
    /// Returned records carry no `id`/`coverUrl`; the dispatcher assigns them.
    pub async fn find_landmarks(&self, city: &str) -> Result<Vec<Landmark>, SearchError> {
        let body = json!({
            "systemInstruction": { "parts": [{ "text": prompt::SYSTEM_PROMPT }] },
            "contents": [{ "role": "user", "parts": [{ "text": prompt::user_prompt(city) }] }],
            "tools": [{ "googleSearch": {} }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": prompt::response_schema(),
            },
        });
        let response = self.generate(SEARCH_MODEL, &body).await?;
        let Some(text) = response.text() else {
            return Ok(Vec::new());
        };
        parse::parse_landmarks(ProviderKind::Gemini, &text)
    }

    /// Grounded place lookup: resolve a Google Maps link and review snippets
    /// for a landmark, at most two reviews retained.
    pub async fn verify_landmark(&self, name: &str, city: &str) -> Result<Grounding, SearchError> {
        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": format!("Give me details for the landmark \"{name}\" in {city}.") }],
            }],
            "tools": [{ "googleMaps": {} }],
        });
        let response = self.generate(SEARCH_MODEL, &body).await?;
        Ok(response.grounding())
    }
}

/// Raw `generateContent` response.
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Candidate {
    pub content: Option<Content>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GroundingChunk {
    #[serde(default)]
    pub maps: Option<MapsChunk>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MapsChunk {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub place_answer_sources: Vec<PlaceAnswerSource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaceAnswerSource {
    #[serde(default)]
    pub review_snippets: Vec<ReviewSnippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReviewSnippet {
    #[serde(default)]
    pub review_text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate, `None` when the
    /// response carries no text.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() { None } else { Some(text) }
    }

    /// First inline image payload anywhere in the first candidate.
    pub fn inline_image(&self) -> Option<InlineData> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        parts.iter().find_map(|p| p.inline_data.clone())
    }

    /// Extract maps grounding from the first candidate: the place link and
    /// at most two review snippets.
    pub fn grounding(&self) -> Grounding {
        let mut grounding = Grounding::default();
        let Some(metadata) = self
            .candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
        else {
            return grounding;
        };
        for chunk in &metadata.grounding_chunks {
            let Some(maps) = &chunk.maps else { continue };
            if let Some(uri) = &maps.uri {
                grounding.google_maps_uri = Some(uri.clone());
            }
            for source in &maps.place_answer_sources {
                for snippet in &source.review_snippets {
                    if let Some(text) = &snippet.review_text {
                        grounding.reviews.push(text.clone());
                    }
                }
            }
        }
        grounding.reviews.truncate(2);
        grounding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_concatenates_parts_of_first_candidate() {
        let raw = r#"{"candidates": [{"content": {"parts": [{"text": "[1,"}, {"text": "2]"}]}}]}"#;
        let response: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn empty_payload_has_no_text() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn grounding_collects_uri_and_caps_reviews() {
        let raw = r#"{"candidates": [{"groundingMetadata": {"groundingChunks": [
            {"maps": {"uri": "https://maps.google.com/?cid=42", "placeAnswerSources": [
                {"reviewSnippets": [
                    {"reviewText": "one"}, {"reviewText": "two"}, {"reviewText": "three"}
                ]}
            ]}},
            {"web": {"uri": "https://example.com"}}
        ]}}]}"#;
        let response: GenerateResponse = serde_json::from_str(raw).unwrap();
        let grounding = response.grounding();
        assert_eq!(
            grounding.google_maps_uri.as_deref(),
            Some("https://maps.google.com/?cid=42")
        );
        assert_eq!(grounding.reviews, ["one", "two"]);
    }
}
