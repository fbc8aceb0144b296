//! Error types for the AI correction layer.

use thiserror::Error;

/// Errors that can occur while asking a model for a vCard.
#[derive(Error, Debug)]
pub enum AiError {
    /// No API key is configured.
    #[error("missing API key")]
    MissingKey,

    /// An image request without images.
    #[error("no images supplied")]
    NoImages,

    /// Image data that cannot be sent.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// The request to the model failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The model answered without any text.
    #[error("model returned an empty response")]
    EmptyResponse,

    /// The output still was not a vCard after all retries.
    #[error("model output is not a vCard")]
    InvalidVCard {
        /// Last cleaned output.
        output: String,
    },
}

impl AiError {
    /// Whether the failure is caused by missing credentials rather than processing.
    pub fn is_missing_key(&self) -> bool {
        matches!(self, AiError::MissingKey)
    }
}
