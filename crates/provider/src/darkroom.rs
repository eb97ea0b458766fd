//! The darkroom filter: AI photo aging over an uploaded image.
//!
//! Single request, no retries. "No image produced" is a soft outcome
//! (`Ok(None)`), distinct from a transport failure.

use crate::gemini::{Gemini, IMAGE_MODEL};
use acore::{ProviderKind, SearchError};
use base64::Engine;
use serde_json::json;

/// An inline image payload returned by the image model.
#[derive(Debug, Clone)]
pub struct DevelopedImage {
    /// MIME type of the payload, e.g. `image/png`.
    pub mime_type: String,
    /// Base64-encoded image data.
    pub data: String,
}

impl DevelopedImage {
    /// The image as a browser-ready data URL.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Decode the payload into raw image bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SearchError> {
        base64::engine::general_purpose::STANDARD
            .decode(&self.data)
            .map_err(|e| SearchError::Malformed {
                provider: ProviderKind::Gemini,
                reason: format!("invalid base64 image payload: {e}"),
            })
    }
}

/// Strip a `data:image/...;base64,` prefix when present.
pub(crate) fn strip_data_url(image: &str) -> &str {
    match image.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:image/") => data,
        _ => image,
    }
}

impl Gemini {
    /// Run the photo aging filter: send the image and the instruction to the
    /// image-capable model and return the first inline image payload found,
    /// or `None` when the response carries no image.
    pub async fn develop(
        &self,
        image_base64: &str,
        instruction: &str,
    ) -> Result<Option<DevelopedImage>, SearchError> {
        let prompt =
            format!("Edit this image: {instruction}. Maintain the aspect ratio. Return the edited image.");
        let body = json!({
            "contents": [{
                "parts": [
                    { "inlineData": { "mimeType": "image/png", "data": strip_data_url(image_base64) } },
                    { "text": prompt },
                ],
            }],
        });
        let response = self.generate(IMAGE_MODEL, &body).await?;
        Ok(response.inline_image().map(|inline| DevelopedImage {
            mime_type: inline.mime_type,
            data: inline.data,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::GenerateResponse;

    #[test]
    fn data_url_prefix_is_stripped() {
        assert_eq!(strip_data_url("data:image/png;base64,QUJD"), "QUJD");
        assert_eq!(strip_data_url("data:image/jpeg;base64,QUJD"), "QUJD");
        assert_eq!(strip_data_url("QUJD"), "QUJD");
    }

    #[test]
    fn first_inline_image_is_selected() {
        let raw = r#"{"candidates": [{"content": {"parts": [
            {"text": "Here is your photograph."},
            {"inlineData": {"mimeType": "image/png", "data": "QUJD"}},
            {"inlineData": {"mimeType": "image/png", "data": "REVG"}}
        ]}}]}"#;
        let response: GenerateResponse = serde_json::from_str(raw).unwrap();
        let inline = response.inline_image().unwrap();
        assert_eq!(inline.data, "QUJD");
    }

    #[test]
    fn text_only_response_has_no_image() {
        let raw = r#"{"candidates": [{"content": {"parts": [{"text": "The spirits are quiet."}]}}]}"#;
        let response: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert!(response.inline_image().is_none());
    }

    #[test]
    fn developed_image_round_trips_to_bytes() {
        let image = DevelopedImage {
            mime_type: "image/png".to_owned(),
            data: "QUJD".to_owned(),
        };
        assert_eq!(image.to_bytes().unwrap(), b"ABC");
        assert_eq!(image.data_url(), "data:image/png;base64,QUJD");
    }
}
