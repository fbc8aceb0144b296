//! vCard 3.0 codec for the subset of properties kontakt reads and writes.
//!
//! Parsing is lenient: structural defects are reported through
//! [`ParsedVCard::is_valid`](crate::models::ParsedVCard) while every readable
//! property is still returned. Generation is total.

mod escape;
mod generate;
mod parse;

pub use generate::{VCardWriter, generate_at, generate_vcard};
pub use parse::{parse_vcard, unfold};

/// Whether `text` contains both `BEGIN:VCARD` and `END:VCARD` (case-insensitive).
///
/// Used to accept or reject vCard text produced by external services.
pub fn looks_like_vcard(text: &str) -> bool {
    let upper = text.to_uppercase();
    upper.contains("BEGIN:VCARD") && upper.contains("END:VCARD")
}
