//! vCard 3.0 serialization.

use chrono::{DateTime, Utc};

use crate::models::contact::{Address, Typed};
use crate::models::vcard::VCardData;

use super::escape::{escape_text, single_line};

const REV_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Serializes [`VCardData`] as vCard 3.0 text, one property per line.
#[derive(Debug, Clone)]
pub struct VCardWriter {
    charset: bool,
}

impl VCardWriter {
    /// Create a writer that tags text properties with `CHARSET=utf-8`.
    pub fn new() -> Self {
        Self { charset: true }
    }

    /// Set whether text properties carry `CHARSET=utf-8`.
    pub fn with_charset(mut self, charset: bool) -> Self {
        self.charset = charset;
        self
    }

    /// Serialize with the current time as `REV`.
    pub fn write(&self, data: &VCardData) -> String {
        self.write_at(data, Utc::now())
    }

    /// Serialize with a fixed `REV` timestamp.
    pub fn write_at(&self, data: &VCardData, rev: DateTime<Utc>) -> String {
        let cs = if self.charset { ";CHARSET=utf-8" } else { "" };
        let mut lines = vec![
            "BEGIN:VCARD".to_string(),
            "VERSION:3.0".to_string(),
            format!("REV:{}", rev.format(REV_FORMAT)),
        ];

        if let Some(n) = structured_name(data) {
            lines.push(format!("N{}:{}", cs, n));
        }
        if let Some(full_name) = non_empty(&data.full_name) {
            lines.push(format!("FN{}:{}", cs, escape_text(full_name)));
        }
        if let Some(org) = non_empty(&data.org) {
            lines.push(format!("ORG{}:{}", cs, escape_text(org)));
        }
        if let Some(title) = non_empty(&data.title) {
            lines.push(format!("TITLE{}:{}", cs, escape_text(title)));
        }
        if let Some(role) = non_empty(&data.role) {
            lines.push(format!("ROLE{}:{}", cs, escape_text(role)));
        }
        if let Some(bday) = non_empty(&data.bday) {
            lines.push(format!("BDAY:{}", single_line(bday)));
        }
        // Embedded images stay out of the card; only references are written.
        if let Some(photo) = non_empty(&data.photo).filter(|p| !p.starts_with("data:")) {
            lines.push(format!("PHOTO:{}", single_line(photo)));
        }
        if let Some(note) = non_empty(&data.note) {
            lines.push(format!("NOTE{}:{}", cs, escape_text(note)));
        }

        for (name, entries) in [("TEL", &data.tel), ("EMAIL", &data.email), ("URL", &data.url)] {
            for entry in entries.iter().filter(|e| !e.value.trim().is_empty()) {
                lines.push(format!(
                    "{}{}{}:{}",
                    name,
                    cs,
                    type_param(&entry.kind),
                    single_line(entry.value.trim())
                ));
            }
        }

        for address in data.adr.iter().filter(|a| !a.value.is_empty()) {
            lines.push(format!(
                "ADR{}{}:{}",
                cs,
                type_param(&address.kind),
                adr_value(address)
            ));
        }

        lines.push("END:VCARD".to_string());
        lines.join("\n")
    }
}

impl Default for VCardWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// `;TYPE=<kind>` with characters that would break the content line removed.
fn type_param(kind: &str) -> String {
    let kind: String = kind
        .chars()
        .filter(|c| !matches!(c, ':' | ';' | '"' | '\r' | '\n'))
        .collect();
    let kind = kind.trim();
    if kind.is_empty() {
        String::new()
    } else {
        format!(";TYPE={}", kind)
    }
}

/// `N` from the stored value, else derived from `FN`: last token is the family name.
fn structured_name(data: &VCardData) -> Option<String> {
    if let Some(n) = non_empty(&data.n) {
        return Some(single_line(n));
    }
    let full_name = non_empty(&data.full_name)?;
    let mut tokens: Vec<&str> = full_name.split_whitespace().collect();
    let family = if tokens.len() > 1 { tokens.pop().unwrap_or_default() } else { "" };
    let given = tokens.join(" ");
    Some(format!("{};{};;;", escape_text(family), escape_text(&given)))
}

/// The seven `ADR` slots; PO box and extended address stay empty.
fn adr_value(address: &Typed<Address>) -> String {
    let a = &address.value;
    [
        "",
        "",
        a.street.as_str(),
        a.city.as_str(),
        a.region.as_str(),
        a.zip.as_str(),
        a.country.as_str(),
    ]
    .into_iter()
    .map(escape_text)
    .collect::<Vec<_>>()
    .join(";")
}

/// Serialize `data` with the current time as `REV` and `CHARSET=utf-8` tags.
pub fn generate_vcard(data: &VCardData) -> String {
    VCardWriter::new().write(data)
}

/// Serialize `data` with a fixed `REV` timestamp.
pub fn generate_at(data: &VCardData, rev: DateTime<Utc>) -> String {
    VCardWriter::new().write_at(data, rev)
}
