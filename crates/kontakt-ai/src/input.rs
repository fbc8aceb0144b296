//! Inputs accepted by the corrector.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::prompt::Mode;
use crate::{AiError, Result};

/// Legacy single-string encoding of an update request: `PREFIX|vcard|instructions`.
const UPDATE_PREFIX: &str = "VCARD_UPDATE_REQUEST|";

/// An image sent inline with the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInput {
    pub mime_type: String,
    /// Base64 payload without a `data:` prefix.
    pub base64: String,
}

impl ImageInput {
    /// Parse a `data:<mime>;base64,<payload>` URL.
    pub fn from_data_url(url: &str) -> Result<Self> {
        let rest = url
            .trim()
            .strip_prefix("data:")
            .ok_or_else(|| AiError::InvalidImage("not a data URL".to_string()))?;
        let (mime_type, payload) = rest
            .split_once(";base64,")
            .ok_or_else(|| AiError::InvalidImage("data URL is not base64 encoded".to_string()))?;

        if !mime_type.starts_with("image/") {
            return Err(AiError::InvalidImage(format!("unsupported type {}", mime_type)));
        }
        STANDARD
            .decode(payload)
            .map_err(|e| AiError::InvalidImage(e.to_string()))?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            base64: payload.to_string(),
        })
    }

    /// Encode raw image bytes.
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Result<Self> {
        if bytes.is_empty() {
            return Err(AiError::InvalidImage("empty image".to_string()));
        }
        Ok(Self {
            mime_type: mime_type.into(),
            base64: STANDARD.encode(bytes),
        })
    }

    /// MIME type for a file extension, for the formats the model accepts.
    pub fn mime_for_extension(extension: &str) -> Option<&'static str> {
        match extension.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some("image/jpeg"),
            "png" => Some("image/png"),
            "webp" => Some("image/webp"),
            "heic" => Some("image/heic"),
            "heif" => Some("image/heif"),
            _ => None,
        }
    }
}

/// What to send to the model.
#[derive(Debug, Clone, PartialEq)]
pub enum CorrectionInput {
    /// Unstructured text such as a signature or an imprint.
    Text(String),
    /// An existing vCard plus free-form edit instructions.
    Update { vcard: String, instructions: String },
    /// Photos of a business card (front and back).
    Images(Vec<ImageInput>),
}

impl CorrectionInput {
    /// Decode text input, recognizing the `VCARD_UPDATE_REQUEST|...` form.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if let Some(rest) = text.strip_prefix(UPDATE_PREFIX) {
            if let Some((vcard, instructions)) = rest.split_once('|') {
                return CorrectionInput::Update {
                    vcard: vcard.to_string(),
                    instructions: instructions.to_string(),
                };
            }
        }
        CorrectionInput::Text(text)
    }

    pub fn mode(&self) -> Mode {
        match self {
            CorrectionInput::Images(_) => Mode::Vision,
            _ => Mode::Text,
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, CorrectionInput::Update { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_data_url() {
        let image = ImageInput::from_data_url("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.base64, "aGVsbG8=");

        assert!(matches!(
            ImageInput::from_data_url("data:text/plain;base64,aGVsbG8="),
            Err(AiError::InvalidImage(_))
        ));
        assert!(ImageInput::from_data_url("data:image/png;base64,***").is_err());
        assert!(ImageInput::from_data_url("https://example.com/a.png").is_err());
    }

    #[test]
    fn test_from_bytes() {
        let image = ImageInput::from_bytes(b"hello", "image/jpeg").unwrap();
        assert_eq!(image.base64, "aGVsbG8=");
        assert!(ImageInput::from_bytes(b"", "image/jpeg").is_err());
        assert_eq!(ImageInput::mime_for_extension("JPG"), Some("image/jpeg"));
        assert_eq!(ImageInput::mime_for_extension("gif"), None);
    }

    #[test]
    fn test_update_request_encoding() {
        let input = CorrectionInput::from_text("VCARD_UPDATE_REQUEST|BEGIN:VCARD|Add phone | fax");
        assert_eq!(
            input,
            CorrectionInput::Update {
                vcard: "BEGIN:VCARD".to_string(),
                instructions: "Add phone | fax".to_string(),
            }
        );
        assert!(input.is_update());
        assert_eq!(CorrectionInput::from_text("plain").mode(), Mode::Text);
        assert_eq!(CorrectionInput::Images(Vec::new()).mode(), Mode::Vision);
    }

    #[test]
    fn test_image_serializes_camel_case() {
        let json = serde_json::to_value(ImageInput::from_bytes(b"x", "image/png").unwrap()).unwrap();
        assert_eq!(json["mimeType"], "image/png");
    }
}
