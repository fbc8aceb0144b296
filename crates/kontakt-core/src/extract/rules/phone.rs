//! Phone number extraction and normalization.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::extract::line::{Line, LineKind};
use crate::models::contact::ContactRecord;

use super::Rule;
use super::patterns::{DATE_DMY, GERMAN_MOBILE, PHONE_LABEL, PHONE_LOOSE, PHONE_STANDALONE};

lazy_static! {
    static ref LETTERS: Regex = Regex::new(r"[a-zA-Z]").unwrap();
    static ref SEPARATORS: Regex = Regex::new(r"[\-._|\\/()\[\]{}]+").unwrap();
    static ref MULTI_SPACE: Regex = Regex::new(r"\s{2,}").unwrap();
    static ref PLUS_SPACE: Regex = Regex::new(r"\+\s+").unwrap();
}

/// Normalize a raw phone token.
///
/// Letters are removed, colons and separator runs become single spaces, a
/// `(0)` trunk marker is dropped and whitespace is collapsed. The output is
/// also used to match contacts across scans, so its format must stay stable.
/// Idempotent.
pub fn normalize_phone(raw: &str) -> String {
    let cleaned = LETTERS.replace_all(raw, "");
    let cleaned = cleaned.replace(':', " ").replace("(0)", "");
    let cleaned = SEPARATORS.replace_all(&cleaned, " ");
    let cleaned = MULTI_SPACE.replace_all(&cleaned, " ");
    let cleaned = PLUS_SPACE.replace_all(&cleaned, "+");
    cleaned.trim().to_string()
}

fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

/// Labelled phone lines first, then strict standalone numbers.
#[derive(Debug)]
pub struct PhoneRule {
    min_digits: usize,
    min_standalone_digits: usize,
}

impl PhoneRule {
    pub fn new() -> Self {
        Self {
            min_digits: 6,
            min_standalone_digits: 7,
        }
    }

    /// Set the digit thresholds for labelled and standalone numbers.
    pub fn with_min_digits(mut self, labelled: usize, standalone: usize) -> Self {
        self.min_digits = labelled;
        self.min_standalone_digits = standalone;
        self
    }

    fn labelled(&self, line: &Line, record: &mut ContactRecord) -> bool {
        let lower = line.clean.to_lowercase();
        let kind = if lower.contains("fax") {
            "FAX"
        } else if lower.contains("mobil") || lower.contains("cell") || lower.contains("handy") {
            "CELL"
        } else if lower.contains("home") || lower.contains("privat") {
            "HOME"
        } else {
            "WORK,VOICE"
        };

        let mut found = false;
        for token in PHONE_LOOSE.find_iter(&line.clean) {
            found = true;
            let number = normalize_phone(token.as_str());
            if digit_count(&number) < self.min_digits {
                continue;
            }
            if record.add_phone(kind, number.as_str()) {
                debug!("Found {} phone {}", kind, number);
            }
        }
        found
    }

    fn standalone(&self, line: &Line, record: &mut ContactRecord) -> bool {
        if !PHONE_STANDALONE.is_match(&line.clean) || DATE_DMY.is_match(&line.clean) {
            return false;
        }
        let number = normalize_phone(&line.clean);
        if digit_count(&number) < self.min_standalone_digits {
            return false;
        }
        let kind = if GERMAN_MOBILE.is_match(&number) {
            "CELL"
        } else {
            "WORK,VOICE"
        };
        if record.add_phone(kind, number.as_str()) {
            debug!("Found standalone {} phone {}", kind, number);
        }
        true
    }
}

impl Default for PhoneRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for PhoneRule {
    fn name(&self) -> &'static str {
        "phone"
    }

    fn apply(&self, lines: &mut [Line], record: &mut ContactRecord) {
        for line in lines.iter_mut().filter(|l| !l.is_consumed()) {
            let claimed = if PHONE_LABEL.is_match(&line.clean) {
                self.labelled(line, record)
            } else {
                self.standalone(line, record)
            };
            if claimed {
                line.claim(LineKind::Phone);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::rules::run_rule;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("Tel: +49 (0) 30 / 123-45 67"), "+49 30 123 45 67");
        assert_eq!(normalize_phone("+ 41.44.123.45.67"), "+41 44 123 45 67");
        assert_eq!(normalize_phone("[0171] 1234567"), "0171 1234567");
        assert_eq!(normalize_phone(""), "");
    }

    #[test]
    fn test_normalize_phone_idempotent() {
        for raw in [
            "Tel: +49 (0) 30 / 123-45 67",
            "Fax.: 030|1234_567",
            "+ 1 (555) 123.4567 x12",
            "0043 (0)1 234 56 78",
            "++49  30",
        ] {
            let once = normalize_phone(raw);
            assert_eq!(normalize_phone(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn test_labelled_kinds() {
        let (lines, record) = run_rule(
            &PhoneRule::new(),
            "Tel: +49 30 1234567\nFax: +49 30 1234568\nMobil: 0171 1234567\nTel. privat: 030 7654321",
        );
        let phones: Vec<(&str, &str)> = record
            .phones
            .iter()
            .map(|p| (p.kind.as_str(), p.value.as_str()))
            .collect();
        assert_eq!(
            phones,
            vec![
                ("WORK,VOICE", "+49 30 1234567"),
                ("FAX", "+49 30 1234568"),
                ("CELL", "0171 1234567"),
                ("HOME", "030 7654321"),
            ]
        );
        assert!(lines.iter().all(|l| l.kind() == LineKind::Phone));
    }

    #[test]
    fn test_privat_without_phone_label() {
        let (lines, record) = run_rule(
            &PhoneRule::new(),
            "Privat: 030 7654321\nTel. privat: 030 7654322",
        );
        let phones: Vec<(&str, &str)> = record
            .phones
            .iter()
            .map(|p| (p.kind.as_str(), p.value.as_str()))
            .collect();
        assert_eq!(phones, vec![("HOME", "030 7654322")]);
        assert!(!lines[0].is_consumed());
        assert!(lines[1].is_consumed());
    }

    #[test]
    fn test_standalone_numbers() {
        let (lines, record) = run_rule(
            &PhoneRule::new(),
            "0171 1234567\n+43 1 234 56 78\n12345\n0123",
        );
        assert_eq!(record.phones.len(), 2);
        assert_eq!(record.phones[0].kind, "CELL");
        assert_eq!(record.phones[1].kind, "WORK,VOICE");
        assert_eq!(record.phones[1].value, "+43 1 234 56 78");
        assert!(!lines[2].is_consumed());
        assert!(!lines[3].is_consumed());
    }

    #[test]
    fn test_duplicate_numbers_suppressed() {
        let (_, record) = run_rule(
            &PhoneRule::new(),
            "Tel: +49 30 1234567\nTelefon: +49 (0)30 1234567\n+49 30 1234567",
        );
        assert_eq!(record.phones.len(), 1);
    }

    #[test]
    fn test_short_labelled_number_rejected() {
        let (_, record) = run_rule(&PhoneRule::new(), "Office hours 9-17, Tel 12 34");
        assert!(record.phones.is_empty());
    }
}
