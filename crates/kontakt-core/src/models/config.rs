//! Configuration structures for extraction, vCard output and AI correction.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KontaktError, Result};

/// Main configuration for kontakt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KontaktConfig {
    /// Heuristic extraction configuration.
    pub extraction: ExtractionConfig,

    /// vCard serialization configuration.
    pub vcard: VCardConfig,

    /// AI correction service configuration.
    pub ai: AiConfig,
}

/// Heuristic extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Country assumed for postal codes without a country hint.
    pub default_country: String,

    /// Minimum digits for a number on a labelled phone line.
    pub min_phone_digits: usize,

    /// Minimum digits for an unlabelled, standalone phone line.
    pub min_standalone_phone_digits: usize,

    /// Additional consumer mail domains that must not yield a company URL.
    pub extra_generic_providers: Vec<String>,

    /// `TYPE` assigned to extracted addresses.
    pub address_kind: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_country: "Deutschland".to_string(),
            min_phone_digits: 6,
            min_standalone_phone_digits: 7,
            extra_generic_providers: Vec::new(),
            address_kind: "WORK".to_string(),
        }
    }
}

/// vCard serialization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VCardConfig {
    /// Emit `CHARSET=utf-8` on text properties for older consumers.
    pub emit_charset: bool,
}

impl Default for VCardConfig {
    fn default() -> Self {
        Self { emit_charset: true }
    }
}

/// Output/prompt language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    De,
    En,
}

impl Language {
    /// Parse a language code such as `de`, `EN` or `de-AT`.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        match code.split(['-', '_']).next().unwrap_or_default() {
            "de" => Some(Language::De),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

/// AI correction service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// API key. Takes precedence over `api_key_env`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Environment variable consulted when `api_key` is unset.
    pub api_key_env: String,

    /// Model name.
    pub model: String,

    /// Base URL of the generative language REST API.
    pub endpoint: String,

    /// Language hint for prompts.
    pub language: Language,

    /// Sampling temperature.
    pub temperature: f32,

    /// Self-correction attempts after an output that is not a vCard.
    pub max_retries: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: "GEMINI_API_KEY".to_string(),
            model: "gemini-2.5-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            language: Language::De,
            temperature: 0.1,
            max_retries: 1,
        }
    }
}

impl AiConfig {
    /// Resolve the API key from the config or the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }
}

impl KontaktConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the extraction passes cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.extraction.min_phone_digits == 0 || self.extraction.min_standalone_phone_digits == 0 {
            return Err(KontaktError::Config(
                "phone digit thresholds must be greater than zero".to_string(),
            ));
        }
        if self.extraction.address_kind.trim().is_empty() {
            return Err(KontaktError::Config("address_kind must not be empty".to_string()));
        }
        if !(0.0..=2.0).contains(&self.ai.temperature) {
            return Err(KontaktError::Config(format!(
                "ai.temperature must be within 0.0..=2.0, got {}",
                self.ai.temperature
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: KontaktConfig =
            serde_json::from_str(r#"{"extraction": {"default_country": "Österreich"}}"#).unwrap();
        assert_eq!(config.extraction.default_country, "Österreich");
        assert_eq!(config.extraction.min_phone_digits, 6);
        assert!(config.vcard.emit_charset);
        assert_eq!(config.ai.max_retries, 1);
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("de-AT"), Some(Language::De));
        assert_eq!(Language::from_code("EN"), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
        let json = serde_json::to_string(&Language::En).unwrap();
        assert_eq!(json, "\"en\"");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = KontaktConfig::default();
        config.ai.language = Language::En;
        config.extraction.extra_generic_providers = vec!["mail.example".to_string()];
        config.save(&path).unwrap();

        let loaded = KontaktConfig::from_file(&path).unwrap();
        assert_eq!(loaded.ai.language, Language::En);
        assert_eq!(loaded.extraction.extra_generic_providers, vec!["mail.example"]);
        assert!(matches!(
            KontaktConfig::from_file(&dir.path().join("missing.json")),
            Err(KontaktError::Io(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_thresholds() {
        let mut config = KontaktConfig::default();
        assert!(config.validate().is_ok());
        config.extraction.min_phone_digits = 0;
        assert!(matches!(config.validate(), Err(KontaktError::Config(_))));
    }
}
