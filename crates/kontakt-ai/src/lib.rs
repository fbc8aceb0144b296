//! AI correction layer for kontakt.
//!
//! Sends raw text, an existing vCard with edit instructions, or business card
//! photos to a generative model and only accepts output that looks like a
//! vCard. Backends:
//! - `GeminiBackend` over the Generative Language REST API (feature `native`)
//! - any custom [`CorrectionBackend`], e.g. a local model or a test double

mod backend;
mod error;
mod input;
pub mod prompt;
mod service;

pub use backend::{CorrectionBackend, Prompt};
pub use error::AiError;
pub use input::{CorrectionInput, ImageInput};
pub use prompt::Mode;
pub use service::{Corrector, clean_response};

#[cfg(feature = "native")]
pub use backend::gemini::GeminiBackend;

/// Result type for AI operations.
pub type Result<T> = std::result::Result<T, AiError>;
