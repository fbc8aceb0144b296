//! Data models: extraction record, vCard editing model and configuration.

pub mod config;
pub mod contact;
pub mod vcard;

pub use config::{AiConfig, ExtractionConfig, KontaktConfig, Language, VCardConfig};
pub use contact::{Address, ContactRecord, StructuredName, Typed};
pub use vcard::{ParsedVCard, VCardData};
