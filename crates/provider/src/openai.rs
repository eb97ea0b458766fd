//! Chat-completions provider: OpenAI and every compatible backend.
//!
//! The backends differ only in endpoint URL and model identifier; DeepSeek is
//! the same adapter pointed at a different base.

use crate::{parse, prompt};
use acore::{Landmark, ProviderKind, SearchError};
use compact_str::CompactString;
use reqwest::{
    Client, Method,
    header::{self, HeaderMap, HeaderValue},
};
use serde::Deserialize;
use serde_json::json;

/// Chat-completions endpoint URLs.
pub mod endpoint {
    /// OpenAI chat completions.
    pub const OPENAI: &str = "https://api.openai.com/v1/chat/completions";
    /// DeepSeek chat completions.
    pub const DEEPSEEK: &str = "https://api.deepseek.com/chat/completions";
}

/// Sampling temperature for landmark search.
const TEMPERATURE: f64 = 0.7;

/// An OpenAI-compatible chat-completions provider.
#[derive(Clone, Debug)]
pub struct OpenAi {
    /// The HTTP client.
    client: Client,
    /// Request headers (bearer authorization, content-type).
    headers: HeaderMap,
    /// Chat completions endpoint URL.
    endpoint: String,
    /// Model identifier sent with each request.
    model: CompactString,
    /// Which backend this instance fronts, for error attribution.
    kind: ProviderKind,
}

impl OpenAi {
    /// Create a provider targeting the OpenAI API.
    pub fn api(client: Client, key: &str) -> Result<Self, SearchError> {
        Self::custom(client, key, endpoint::OPENAI, "gpt-4o", ProviderKind::OpenAi)
    }

    /// Create a provider targeting the DeepSeek API.
    pub fn deepseek(client: Client, key: &str) -> Result<Self, SearchError> {
        Self::custom(
            client,
            key,
            endpoint::DEEPSEEK,
            "deepseek-chat",
            ProviderKind::DeepSeek,
        )
    }

    /// Create a provider targeting a custom compatible endpoint.
    pub fn custom(
        client: Client,
        key: &str,
        endpoint: &str,
        model: &str,
        kind: ProviderKind,
    ) -> Result<Self, SearchError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {key}")
                .parse()
                .map_err(|_| SearchError::auth(kind))?,
        );
        Ok(Self {
            client,
            headers,
            endpoint: endpoint.to_owned(),
            model: model.into(),
            kind,
        })
    }

    /// The backend this instance fronts.
    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    /// Find literary landmarks in a city.
    ///
    /// A non-success status surfaces the backend's embedded error message
    /// when present. The reply is stripped of markdown code fences before
    /// JSON parsing. Returned records carry no `id`/`coverUrl`.
    pub async fn find_landmarks(&self, city: &str) -> Result<Vec<Landmark>, SearchError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": format!("{}{}", prompt::SYSTEM_PROMPT, prompt::RAW_JSON_SUFFIX) },
                { "role": "user", "content": prompt::user_prompt(city) },
            ],
            "temperature": TEMPERATURE,
        });
        tracing::debug!("{} request: {body}", self.kind);

        let response = self
            .client
            .request(Method::POST, &self.endpoint)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchError::Request {
                provider: self.kind,
                message: e.to_string(),
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| SearchError::Request {
            provider: self.kind,
            message: e.to_string(),
        })?;
        tracing::debug!("{} response ({status}): {text}", self.kind);

        if !status.is_success() {
            return Err(SearchError::Request {
                provider: self.kind,
                message: error_message(&text),
            });
        }

        let reply: ChatResponse = serde_json::from_str(&text).map_err(|e| SearchError::Malformed {
            provider: self.kind,
            reason: e.to_string(),
        })?;
        let Some(content) = reply.content() else {
            return Err(SearchError::Malformed {
                provider: self.kind,
                reason: "response carried no message content".to_owned(),
            });
        };
        parse::parse_landmarks(self.kind, &parse::strip_code_fences(content))
    }
}

/// Raw chat-completions response.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    fn content(&self) -> Option<&str> {
        self.choices.first()?.message.content.as_deref()
    }
}

/// Error envelope on a non-success status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
}

/// The backend's embedded error message, else a generic failure.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .map(|e| e.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "API request failed".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_error_message_is_surfaced() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(error_message(body), "Incorrect API key provided");
    }

    #[test]
    fn missing_error_message_falls_back_to_generic() {
        assert_eq!(error_message("{}"), "API request failed");
        assert_eq!(error_message("<html>502</html>"), "API request failed");
    }

    #[test]
    fn content_reads_first_choice() {
        let raw = r#"{"choices": [{"message": {"role": "assistant", "content": "[]"}}]}"#;
        let reply: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(reply.content(), Some("[]"));
    }

    #[test]
    fn empty_choices_has_no_content() {
        let reply: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(reply.content().is_none());
    }
}
