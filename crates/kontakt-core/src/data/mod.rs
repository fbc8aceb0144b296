//! Static reference data: known cities and given names.
//!
//! Both tables are folded to lowercase once and queried by set membership.

mod cities;
mod first_names;

use std::collections::HashSet;

use lazy_static::lazy_static;

lazy_static! {
    static ref CITY_SET: HashSet<String> =
        cities::CITIES.iter().map(|c| c.to_lowercase()).collect();

    static ref FIRST_NAME_SET: HashSet<String> =
        first_names::FIRST_NAMES.iter().map(|n| n.to_lowercase()).collect();

    /// Largest number of words in any known city name.
    static ref MAX_CITY_WORDS: usize = cities::CITIES
        .iter()
        .map(|c| c.split_whitespace().count())
        .max()
        .unwrap_or(1);
}

/// Whether `name` is a known city (case-insensitive, exact).
pub fn is_known_city(name: &str) -> bool {
    CITY_SET.contains(&name.trim().to_lowercase())
}

/// Whether `name` is a known given name (case-insensitive, exact).
pub fn is_first_name(name: &str) -> bool {
    FIRST_NAME_SET.contains(&name.trim().to_lowercase())
}

/// Find the longest known city at the start of `text`.
///
/// Returns the city as written in `text`. A city must end at a word boundary,
/// so `Berlin-Mitte` yields `Berlin` but `Essener` yields nothing.
pub fn leading_city(text: &str) -> Option<&str> {
    let words: Vec<(usize, &str)> = text
        .split_whitespace()
        .take(*MAX_CITY_WORDS)
        .map(|w| (w.as_ptr() as usize - text.as_ptr() as usize, w))
        .collect();

    for count in (1..=words.len()).rev() {
        let (start, first) = words[count - 1];
        let end = start + first.len();
        let candidate = &text[..end];
        if is_known_city(candidate) {
            return Some(candidate.trim_start());
        }
        // The last word may carry punctuation or a district suffix.
        let head = first
            .split(|c: char| c == ',' || c == '-' || c == '/')
            .next()
            .unwrap_or_default();
        if !head.is_empty() && head.len() < first.len() {
            let candidate = &text[..start + head.len()];
            if is_known_city(candidate) {
                return Some(candidate.trim_start());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_lookup_is_case_insensitive() {
        assert!(is_known_city("Berlin"));
        assert!(is_known_city("MÜNCHEN"));
        assert!(!is_known_city("Musterstadt"));
    }

    #[test]
    fn test_leading_city_prefers_longest() {
        assert_eq!(leading_city("Frankfurt am Main"), Some("Frankfurt am Main"));
        assert_eq!(leading_city("Frankfurt"), Some("Frankfurt"));
        assert_eq!(leading_city("Köln, Germany"), Some("Köln"));
        assert_eq!(leading_city("Berlin-Mitte"), Some("Berlin"));
        assert_eq!(leading_city("Essener Str. 4"), None);
        assert_eq!(leading_city(""), None);
    }

    #[test]
    fn test_first_names() {
        assert!(is_first_name("anna"));
        assert!(is_first_name("Jürgen"));
        assert!(!is_first_name("Mustermann"));
    }
}
