//! Core library for turning unstructured contact text into vCard 3.0.
//!
//! This crate provides:
//! - Heuristic extraction of names, companies, addresses, phones, emails,
//!   URLs and tax IDs from imprints, signatures and business card text
//! - A lenient vCard 3.0 parser and a total generator
//! - Readable-text rendering, export file names and contact merging

pub mod data;
pub mod error;
pub mod extract;
pub mod filename;
pub mod merge;
pub mod models;
pub mod readable;
pub mod vcard;

pub use error::{KontaktError, Result, VCardError};
pub use extract::rules::normalize_phone;
pub use extract::{ContactParser, ExtractionResult, ImpressumParser, parse_impressum_to_vcard};
pub use models::{
    Address, ContactRecord, KontaktConfig, Language, ParsedVCard, StructuredName, Typed, VCardData,
};
pub use vcard::{VCardWriter, generate_vcard, looks_like_vcard, parse_vcard};
