//! File names for exported contacts.

use chrono::NaiveDate;

use crate::models::vcard::VCardData;

const UNKNOWN: &str = "Unbekannt";

fn safe(part: &str) -> String {
    part.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || "äöüÄÖÜß".contains(c) {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// `<YYYY-MM-DD>_<given>_<family>[_<org>]` without extension.
///
/// Characters outside `A-Za-z0-9äöüÄÖÜß` become `_`. A single-word name is
/// used as the family part; a missing name becomes `Unbekannt`.
pub fn contact_filename(data: &VCardData, date: NaiveDate) -> String {
    let full_name = data.display_name().unwrap_or_else(|| UNKNOWN.to_string());
    let words: Vec<&str> = full_name.split_whitespace().collect();
    let (given, family) = match words.as_slice() {
        [] => ("", UNKNOWN),
        [single] => ("", *single),
        [first, .., last] => (*first, *last),
    };

    let mut parts = vec![date.format("%Y-%m-%d").to_string(), safe(given), safe(family)];
    if let Some(org) = data.org.as_deref().filter(|o| !o.trim().is_empty()) {
        parts.push(safe(org.trim()));
    }

    parts
        .into_iter()
        .filter(|p| !p.is_empty() && !p.chars().all(|c| c == '_'))
        .collect::<Vec<_>>()
        .join("_")
}
