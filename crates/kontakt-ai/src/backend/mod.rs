//! Model backend implementations.

#[cfg(feature = "native")]
pub mod gemini;

use std::future::Future;

use crate::{ImageInput, Result};

/// One request to a model: instruction text plus optional images.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub text: String,
    pub images: Vec<ImageInput>,
    pub temperature: f32,
}

impl Prompt {
    /// A text-only prompt.
    pub fn text(text: impl Into<String>, temperature: f32) -> Self {
        Self {
            text: text.into(),
            images: Vec::new(),
            temperature,
        }
    }
}

/// Trait for generative model backends.
///
/// Implementations return the raw model text; cleaning and validation are
/// done by [`crate::Corrector`].
pub trait CorrectionBackend: Send + Sync {
    /// Whether credentials are available. Checked before any request.
    fn is_configured(&self) -> bool {
        true
    }

    /// Send the prompt and return the model's text.
    fn generate(&self, prompt: &Prompt) -> impl Future<Output = Result<String>> + Send;
}
