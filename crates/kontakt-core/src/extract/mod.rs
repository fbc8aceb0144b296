//! Heuristic extraction of contact data from unstructured text.

pub mod line;
mod parser;
pub mod rules;

pub use line::{Line, LineKind, segment};
pub use parser::{ExtractionResult, ImpressumParser, parse_impressum_to_vcard};

/// Trait for contact parsers.
pub trait ContactParser {
    /// Extract a contact from text. Never fails; missing fields stay empty.
    fn parse(&self, text: &str) -> ExtractionResult;
}
