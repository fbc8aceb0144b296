//! Plain-text rendering of a vCard for previews and clipboard export.

use crate::models::config::Language;
use crate::vcard::parse_vcard;

struct Labels {
    name: &'static str,
    org: &'static str,
    title: &'static str,
    phone: &'static str,
    email: &'static str,
    web: &'static str,
    address: &'static str,
    note: &'static str,
}

const GERMAN: Labels = Labels {
    name: "Name",
    org: "Firma",
    title: "Titel",
    phone: "Tel",
    email: "Email",
    web: "Web",
    address: "Adresse",
    note: "Notiz",
};

const ENGLISH: Labels = Labels {
    name: "Name",
    org: "Company",
    title: "Title",
    phone: "Phone",
    email: "Email",
    web: "Web",
    address: "Address",
    note: "Note",
};

/// Render vCard text as labelled lines (`Tel (WORK): ...`).
///
/// Text that is not a valid vCard is returned unchanged.
pub fn to_readable_text(vcard: &str, language: Language) -> String {
    let parsed = parse_vcard(vcard);
    if !parsed.is_valid {
        return vcard.to_string();
    }

    let labels = match language {
        Language::De => &GERMAN,
        Language::En => &ENGLISH,
    };
    let d = &parsed.data;
    let mut text = String::new();

    for (label, value) in [
        (labels.name, &d.full_name),
        (labels.org, &d.org),
        (labels.title, &d.title),
    ] {
        if let Some(value) = value {
            text.push_str(&format!("{}: {}\n", label, value));
        }
    }

    for (label, entries) in [(labels.phone, &d.tel), (labels.email, &d.email), (labels.web, &d.url)] {
        for entry in entries {
            text.push_str(&format!("{} ({}): {}\n", label, entry.kind, entry.value));
        }
    }

    for address in &d.adr {
        text.push_str(&format!(
            "{} ({}): {}\n",
            labels.address,
            address.kind,
            address.value.format()
        ));
    }

    if let Some(note) = &d.note {
        text.push_str(&format!("{}: {}\n", labels.note, note));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CARD: &str = "BEGIN:VCARD
VERSION:3.0
FN:Anna Schmidt
ORG:Beispiel AG
TEL;TYPE=CELL:0171 1234567
EMAIL;TYPE=WORK:anna@beispiel.de
ADR;TYPE=WORK:;;Bahnhofstrasse 1;Zürich;;8001;Schweiz
NOTE:UStID: CHE123
END:VCARD";

    #[test]
    fn test_german_labels() {
        assert_eq!(
            to_readable_text(CARD, Language::De),
            "Name: Anna Schmidt\nFirma: Beispiel AG\nTel (CELL): 0171 1234567\nEmail (WORK): anna@beispiel.de\nAdresse (WORK): Bahnhofstrasse 1, 8001 Zürich, Schweiz\nNotiz: UStID: CHE123\n"
        );
    }

    #[test]
    fn test_english_labels() {
        let text = to_readable_text(CARD, Language::En);
        assert!(text.starts_with("Name: Anna Schmidt\nCompany: Beispiel AG\nPhone (CELL)"));
        assert!(text.ends_with("Note: UStID: CHE123\n"));
    }

    #[test]
    fn test_invalid_input_unchanged() {
        assert_eq!(to_readable_text("just text", Language::De), "just text");
    }
}
