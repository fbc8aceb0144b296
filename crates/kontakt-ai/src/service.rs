//! Correction service: prompt, validate, retry.

use kontakt_core::Language;
use kontakt_core::models::AiConfig;
use kontakt_core::vcard::looks_like_vcard;
use tracing::{debug, info, warn};

use crate::backend::{CorrectionBackend, Prompt};
use crate::input::CorrectionInput;
use crate::prompt::{self, Mode};
use crate::{AiError, Result};

/// Strip Markdown fences and a leading `vcard:` label from model output.
pub fn clean_response(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find("```") {
        text.push_str(&rest[..pos]);
        rest = &rest[pos + 3..];
        if rest.get(..5).is_some_and(|tag| tag.eq_ignore_ascii_case("vcard")) {
            rest = &rest[5..];
        }
    }
    text.push_str(rest);

    let text = text.trim();
    match text.get(..6) {
        Some(label) if label.eq_ignore_ascii_case("vcard:") => text[6..].trim().to_string(),
        _ => text.to_string(),
    }
}

/// Turns contact input into vCard text through a model backend.
pub struct Corrector<B> {
    backend: B,
    language: Language,
    temperature: f32,
    max_retries: u32,
}

impl<B: CorrectionBackend> Corrector<B> {
    pub fn new(backend: B) -> Self {
        Self::from_config(backend, &AiConfig::default())
    }

    pub fn from_config(backend: B, config: &AiConfig) -> Self {
        Self {
            backend,
            language: config.language,
            temperature: config.temperature,
            max_retries: config.max_retries,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Number of follow-up requests after an output that is not a vCard.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn initial_prompt(&self, input: &CorrectionInput) -> Result<Prompt> {
        let system = prompt::system_prompt(self.language, input.mode(), input.is_update());
        let prompt = match input {
            CorrectionInput::Text(text) => {
                Prompt::text(prompt::with_input(&system, text), self.temperature)
            }
            CorrectionInput::Update { vcard, instructions } => Prompt::text(
                prompt::with_input(&system, &prompt::update_input(vcard, instructions)),
                self.temperature,
            ),
            CorrectionInput::Images(images) => {
                if images.is_empty() {
                    return Err(AiError::NoImages);
                }
                Prompt {
                    text: system,
                    images: images.clone(),
                    temperature: self.temperature,
                }
            }
        };
        Ok(prompt)
    }

    /// Ask the model for a vCard.
    ///
    /// Output without `BEGIN:VCARD`/`END:VCARD` is sent back with a rejection
    /// notice up to `max_retries` times before failing with
    /// [`AiError::InvalidVCard`].
    pub async fn correct(&self, input: &CorrectionInput) -> Result<String> {
        if !self.backend.is_configured() {
            return Err(AiError::MissingKey);
        }

        let mut prompt = self.initial_prompt(input)?;
        let mode = input.mode();
        info!(
            "Requesting vCard ({} mode, update: {})",
            if mode == Mode::Vision { "vision" } else { "text" },
            input.is_update()
        );

        let mut last = String::new();
        for attempt in 0..=self.max_retries {
            let raw = self.backend.generate(&prompt).await?;
            let cleaned = clean_response(&raw);
            debug!("Attempt {} returned {} chars", attempt + 1, cleaned.len());

            if looks_like_vcard(&cleaned) {
                return Ok(cleaned);
            }
            warn!("Attempt {} did not return a vCard", attempt + 1);
            prompt = Prompt::text(prompt::rejection(&cleaned), self.temperature);
            last = cleaned;
        }

        if last.is_empty() {
            Err(AiError::EmptyResponse)
        } else {
            Err(AiError::InvalidVCard { output: last })
        }
    }
}
