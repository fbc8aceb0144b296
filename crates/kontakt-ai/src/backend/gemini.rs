//! Gemini backend over the Generative Language REST API.

use std::time::Duration;

use kontakt_core::models::AiConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CorrectionBackend, Prompt};
use crate::{AiError, Result};

const USER_AGENT: &str = concat!("kontakt/", env!("CARGO_PKG_VERSION"));
const TIMEOUT_SECS: u64 = 60;

/// Backend calling `models/{model}:generateContent`.
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    client: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiBackend {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let defaults = AiConfig::default();
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|e| AiError::Request(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            endpoint: defaults.endpoint,
        })
    }

    /// Build from configuration, resolving the key from the environment if needed.
    pub fn from_config(config: &AiConfig) -> Result<Self> {
        let api_key = config.resolve_api_key().ok_or(AiError::MissingKey)?;
        Ok(Self::new(api_key, config.model.clone())?.with_endpoint(config.endpoint.clone()))
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl CorrectionBackend for GeminiBackend {
    fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    async fn generate(&self, prompt: &Prompt) -> Result<String> {
        debug!("POST {} ({} images)", self.url(), prompt.images.len());
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| AiError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Request(format!("HTTP {}: {}", status, body.trim())));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AiError::Request(e.to_string()))?;
        body.text().ok_or(AiError::EmptyResponse)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text {
        text: &'a str,
    },
    #[serde(rename_all = "camelCase")]
    Inline {
        inline_data: InlineData<'a>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

impl<'a> GenerateRequest<'a> {
    fn from_prompt(prompt: &'a Prompt) -> Self {
        let mut parts = vec![Part::Text { text: &prompt.text }];
        parts.extend(prompt.images.iter().map(|image| Part::Inline {
            inline_data: InlineData {
                mime_type: &image.mime_type,
                data: &image.base64,
            },
        }));
        Self {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                temperature: prompt.temperature,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, parts concatenated.
    fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        Some(text).filter(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImageInput;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_request_json() {
        let prompt = Prompt {
            text: "extract".to_string(),
            images: vec![ImageInput::from_bytes(b"hello", "image/png").unwrap()],
            temperature: 0.5,
        };
        let value = serde_json::to_value(GenerateRequest::from_prompt(&prompt)).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{
                    "parts": [
                        {"text": "extract"},
                        {"inlineData": {"mimeType": "image/png", "data": "aGVsbG8="}}
                    ]
                }],
                "generationConfig": {"temperature": 0.5}
            })
        );
    }

    #[test]
    fn test_response_text() {
        let body: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "BEGIN:VCARD\n"}, {"text": "END:VCARD"}]}}]
        }))
        .unwrap();
        assert_eq!(body.text().as_deref(), Some("BEGIN:VCARD\nEND:VCARD"));

        let blocked: GenerateResponse =
            serde_json::from_value(json!({"promptFeedback": {"blockReason": "SAFETY"}})).unwrap();
        assert_eq!(blocked.text(), None);
    }

    #[test]
    fn test_from_config() {
        let config = AiConfig {
            api_key: Some("secret".to_string()),
            endpoint: "http://localhost:8080/v1/".to_string(),
            ..AiConfig::default()
        };
        let backend = GeminiBackend::from_config(&config).unwrap();
        assert!(backend.is_configured());
        assert_eq!(
            backend.url(),
            "http://localhost:8080/v1/models/gemini-2.5-flash:generateContent"
        );

        let missing = AiConfig {
            api_key_env: "KONTAKT_TEST_UNSET_KEY".to_string(),
            ..AiConfig::default()
        };
        assert!(matches!(GeminiBackend::from_config(&missing), Err(AiError::MissingKey)));
    }
}
