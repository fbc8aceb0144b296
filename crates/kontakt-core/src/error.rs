//! Error types for the kontakt-core library.

use thiserror::Error;

/// Main error type for the kontakt library.
#[derive(Error, Debug)]
pub enum KontaktError {
    /// A vCard failed strict validation.
    #[error("vCard error: {0}")]
    VCard(#[from] VCardError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Structural defects of a vCard document.
///
/// The lenient parser never returns these; they only surface through
/// [`crate::models::vcard::ParsedVCard::into_valid`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VCardError {
    /// The input contained no text at all.
    #[error("vCard is empty")]
    Empty,

    /// No `BEGIN:VCARD` line was found.
    #[error("missing BEGIN:VCARD marker")]
    MissingBegin,

    /// No `END:VCARD` marker was found.
    #[error("missing END:VCARD marker")]
    MissingEnd,
}

/// Result type for the kontakt library.
pub type Result<T> = std::result::Result<T, KontaktError>;
