//! Lenient vCard parser.

use tracing::debug;

use crate::error::VCardError;
use crate::models::contact::{Address, Typed};
use crate::models::vcard::{ParsedVCard, VCardData};

use super::escape::{split_components, unescape_text};

/// Parameter tokens that never name a type.
const ENCODING_MARKERS: &[&str] = &["CHARSET", "ENCODING", "QUOTED-PRINTABLE", "UTF-8"];

/// `TYPE` label used when a property carries none.
pub const DEFAULT_KIND: &str = "Standard";

/// Unfolds a vCard document by removing line continuations.
///
/// A line break (CRLF, LF or CR) followed by a space or tab continues the
/// previous line; the break and the single whitespace are dropped.
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\r' || c == '\n' {
            if c == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
            }
            if matches!(chars.peek(), Some(' ' | '\t')) {
                chars.next();
            } else {
                result.push('\n');
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// A content line split into name, parameters and value.
struct ContentLine<'a> {
    name: String,
    params: Vec<&'a str>,
    value: &'a str,
}

impl<'a> ContentLine<'a> {
    /// Parse `[group.]NAME[;PARAM...]:VALUE`. Lines without a colon are skipped.
    fn parse(line: &'a str) -> Option<Self> {
        let (key, value) = line.split_once(':')?;
        let mut parts = key.split(';');
        let name = parts.next()?.trim();
        // Drop a group prefix such as `item1.`
        let name = name.rsplit('.').next().unwrap_or(name).to_uppercase();
        Some(Self {
            name,
            params: parts.collect(),
            value: value.trim(),
        })
    }

    /// The type label: first token of `TYPE=`, else a bare non-encoding parameter.
    fn kind(&self) -> String {
        let explicit = self.params.iter().find_map(|p| {
            let (key, value) = p.split_once('=')?;
            key.trim().eq_ignore_ascii_case("TYPE").then_some(value)
        });
        if let Some(value) = explicit {
            let first = value.trim_matches('"').split(',').next().unwrap_or_default().trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }

        self.params
            .iter()
            .map(|p| p.trim())
            .find(|p| {
                let upper = p.to_uppercase();
                !p.is_empty()
                    && !upper.contains('=')
                    && !ENCODING_MARKERS.iter().any(|m| upper.contains(m))
            })
            .unwrap_or(DEFAULT_KIND)
            .to_string()
    }

    fn has_param(&self, key: &str, value: &str) -> bool {
        self.params.iter().any(|p| match p.split_once('=') {
            Some((k, v)) => k.trim().eq_ignore_ascii_case(key) && v.trim().eq_ignore_ascii_case(value),
            None => p.trim().eq_ignore_ascii_case(value),
        })
    }

    fn text(&self) -> Option<String> {
        Some(unescape_text(self.value)).filter(|v| !v.is_empty())
    }
}

fn parse_org(value: &str) -> Option<String> {
    let org = split_components(value)
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    Some(org).filter(|o| !o.is_empty())
}

fn parse_adr(value: &str) -> Address {
    let parts = split_components(value);
    let slot = |i: usize| parts.get(i).map(|p| p.trim().to_string()).unwrap_or_default();
    Address {
        street: slot(2),
        city: slot(3),
        region: slot(4),
        zip: slot(5),
        country: slot(6),
    }
}

/// Embedded photos become `data:` URIs so the writer can recognize and skip them.
fn parse_photo(line: &ContentLine<'_>) -> String {
    if line.has_param("ENCODING", "b") || line.has_param("ENCODING", "BASE64") {
        let subtype = line
            .params
            .iter()
            .find_map(|p| {
                let (k, v) = p.split_once('=')?;
                k.trim().eq_ignore_ascii_case("TYPE").then(|| v.trim().to_lowercase())
            })
            .unwrap_or_else(|| "jpeg".to_string());
        format!("data:image/{};base64,{}", subtype, line.value)
    } else {
        line.value.to_string()
    }
}

/// Parse vCard text into [`VCardData`].
///
/// Never fails: every recognizable property is read even when `BEGIN:VCARD`
/// or `END:VCARD` is missing, in which case `is_valid` is false. Multi-valued
/// properties keep their order of appearance.
pub fn parse_vcard(text: &str) -> ParsedVCard {
    let mut data = VCardData::default();
    let mut has_begin = false;

    for line in unfold(text).lines() {
        if line.trim().eq_ignore_ascii_case("BEGIN:VCARD") {
            has_begin = true;
            continue;
        }
        let Some(content) = ContentLine::parse(line) else {
            continue;
        };

        match content.name.as_str() {
            "FN" => data.full_name = content.text(),
            "N" => data.n = Some(content.value.to_string()).filter(|n| !n.is_empty()),
            "ORG" => data.org = parse_org(content.value),
            "TITLE" => data.title = content.text(),
            "ROLE" => data.role = content.text(),
            "NOTE" => data.note = content.text(),
            "BDAY" => data.bday = Some(content.value.to_string()).filter(|v| !v.is_empty()),
            "PHOTO" if !content.value.is_empty() => data.photo = Some(parse_photo(&content)),
            "TEL" | "EMAIL" | "URL" if !content.value.is_empty() => {
                let entry = Typed::new(content.kind(), content.value.to_string());
                match content.name.as_str() {
                    "TEL" => data.tel.push(entry),
                    "EMAIL" => data.email.push(entry),
                    _ => data.url.push(entry),
                }
            }
            "ADR" => {
                let address = parse_adr(content.value);
                if !address.is_empty() {
                    data.adr.push(Typed::new(content.kind(), address));
                }
            }
            _ => {}
        }
    }

    if data.full_name.is_none() {
        data.full_name = data.structured_name().map(|n| n.display_name());
    }

    let defect = if text.trim().is_empty() {
        Some(VCardError::Empty)
    } else if !has_begin {
        Some(VCardError::MissingBegin)
    } else if !text.to_uppercase().contains("END:VCARD") {
        Some(VCardError::MissingEnd)
    } else {
        None
    };
    debug!(
        "Parsed vCard with {} phones, {} emails, defect: {:?}",
        data.tel.len(),
        data.email.len(),
        defect
    );

    ParsedVCard {
        raw: text.to_string(),
        data,
        is_valid: defect.is_none(),
        defect,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unfold() {
        assert_eq!(unfold("NOTE:Lang\r\n  er Text\nFN:A"), "NOTE:Lang er Text\nFN:A");
        assert_eq!(unfold("A\r\n\tB\rC"), "AB\nC");
    }

    #[test]
    fn test_type_parameters() {
        let parsed = parse_vcard(
            "BEGIN:VCARD\nTEL;TYPE=WORK,VOICE:+49 30 1\nTEL;CHARSET=utf-8;CELL:0171 2\nTEL:030 3\nEMAIL;type=\"home\":a@b.de\nitem1.URL;TYPE=XING:https://xing.com/x\nEND:VCARD",
        );
        let kinds: Vec<&str> = parsed.data.tel.iter().map(|t| t.kind.as_str()).collect();
        assert_eq!(kinds, vec!["WORK", "CELL", "Standard"]);
        assert_eq!(parsed.data.email[0].kind, "home");
        assert_eq!(parsed.data.url[0].kind, "XING");
    }

    #[test]
    fn test_n_without_fn() {
        let parsed = parse_vcard("BEGIN:VCARD\nN:Mustermann;Max;Peter;Dr.;\nEND:VCARD");
        assert_eq!(parsed.data.full_name.as_deref(), Some("Dr. Max Peter Mustermann"));
        assert_eq!(parsed.data.n.as_deref(), Some("Mustermann;Max;Peter;Dr.;"));
    }

    #[test]
    fn test_fn_wins_over_n() {
        let parsed = parse_vcard("BEGIN:VCARD\nN:Mustermann;Max;;;\nFN:Max M.\nEND:VCARD");
        assert_eq!(parsed.data.full_name.as_deref(), Some("Max M."));
    }

    #[test]
    fn test_org_departments_flattened() {
        let parsed = parse_vcard("BEGIN:VCARD\nORG:Musterfirma GmbH;Vertrieb;;Nord\nEND:VCARD");
        assert_eq!(parsed.data.org.as_deref(), Some("Musterfirma GmbH Vertrieb Nord"));
    }

    #[test]
    fn test_adr_slots() {
        let parsed = parse_vcard("BEGIN:VCARD\nADR;WORK:Postfach 1;c/o;Hauptstr. 5;Zürich;ZH;8001;Schweiz\nEND:VCARD");
        let adr = &parsed.data.adr[0];
        assert_eq!(adr.kind, "WORK");
        assert_eq!(adr.value.format(), "Hauptstr. 5, 8001 Zürich, Schweiz");
        assert_eq!(adr.value.region, "ZH");
    }

    #[test]
    fn test_note_newlines() {
        let parsed = parse_vcard("BEGIN:VCARD\nNOTE:UStID: DE123\\nStNr: 12/345\nEND:VCARD");
        assert_eq!(parsed.data.note.as_deref(), Some("UStID: DE123\nStNr: 12/345"));
    }

    #[test]
    fn test_embedded_photo() {
        let parsed = parse_vcard("BEGIN:VCARD\nPHOTO;ENCODING=b;TYPE=PNG:iVBORw0KGgo=\nEND:VCARD");
        assert_eq!(parsed.data.photo.as_deref(), Some("data:image/png;base64,iVBORw0KGgo="));
        let parsed = parse_vcard("BEGIN:VCARD\nPHOTO;VALUE=uri:https://example.com/me.jpg\nEND:VCARD");
        assert_eq!(parsed.data.photo.as_deref(), Some("https://example.com/me.jpg"));
    }

    #[test]
    fn test_validity() {
        let missing_end = parse_vcard("BEGIN:VCARD\nFN:Max Mustermann");
        assert!(!missing_end.is_valid);
        assert_eq!(missing_end.defect(), Some(&VCardError::MissingEnd));
        assert_eq!(missing_end.data.full_name.as_deref(), Some("Max Mustermann"));

        let missing_begin = parse_vcard("FN:Max Mustermann\nend:vcard");
        assert_eq!(missing_begin.clone().into_valid(), Err(VCardError::MissingBegin));
        assert_eq!(missing_begin.data.full_name.as_deref(), Some("Max Mustermann"));

        assert_eq!(parse_vcard("  ").into_valid(), Err(VCardError::Empty));
        assert!(parse_vcard("begin:vcard\r\nend:vcard").is_valid);
    }

    #[test]
    fn test_garbage_is_tolerated() {
        let parsed = parse_vcard(":::\n;;;\nTEL\nADR:\n\u{0}:\u{0}");
        assert!(!parsed.is_valid);
        assert!(parsed.data.tel.is_empty());
        assert!(parsed.data.adr.is_empty());
    }
}
