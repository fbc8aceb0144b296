//! Instruction text for vCard extraction and correction.

use chrono::{SecondsFormat, Utc};
use kontakt_core::Language;

/// Whether the model reads text or images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Text,
    Vision,
}

const ROLE: &str = "ROLE: You are a data extraction engine specialized in vCard 3.0 (RFC 2426).
GOAL: Extract the contact information from the input and return it as one valid vCard.";

const INPUT_RULES: &str = "INPUT RULES:
1. Ignore legal disclaimers, \"Sent from my phone\" lines, GDPR/Datenschutz notes, print warnings and navigation labels (Home, About Us, Login).
2. Identify the primary contact person. If several people are listed, prefer the sender or card owner.
3. If no person is present, create a company vCard with ORG only.";

const UPDATE_RULES: &str = "UPDATE MODE:
- The input contains an EXISTING VCARD and USER INSTRUCTIONS.
- Apply the instructions to the vCard.
- Keep existing data unless the instructions change or delete it.
- Example: \"Add LinkedIn url ...\" becomes URL;TYPE=LINKEDIN:...";

const FIELD_RULES: &str = "FIELD RULES:
1. N: Family;Given;Middle;Prefix;Suffix. \"Prof. Dr. Max Peter Mustermann MBA\" becomes \"Mustermann;Max;Peter;Prof. Dr.;MBA\". Handle reversed names (\"Mustermann, Max\").
2. FN: \"Prefix Given Family Suffix\" as readable text.
3. ORG: Company;Department. Keep the legal form (GmbH, AG, Inc.) in the company name.
4. ADR: ;;Street Number;City;Region;Zip;Country.
   - A 5-digit ZIP in a German text means Country \"Deutschland\".
   - Prefix \"A-\" means \"Österreich\", prefix \"CH-\" means \"Schweiz\".
5. TEL: E.164 format (+49 30 123456). Mobil/Cell/Handy is TYPE=CELL, Tel/Phone/Büro/Office/Zentrale is TYPE=WORK, Fax is TYPE=FAX, Privat/Home is TYPE=HOME.
6. EMAIL and URL: extract all. Personal addresses are HOME, corporate ones WORK. Profile links use their platform as type (URL;TYPE=LINKEDIN:..., XING, TWITTER).
7. NOTE: useful context without a field of its own, e.g. opening hours or tax IDs. No disclaimers.
8. PHOTO: never embed base64 data. Only use a public image URL.";

const TEXT_TASK: &str =
    "TASK: Text extraction. The input is raw text such as an email signature or a website imprint.";

const VISION_TASK: &str = "TASK: OCR and extraction. The input is a photo of a business card. Use logos, small print and layout to tell the company from the person.";

/// Build the system prompt for a request.
pub fn system_prompt(language: Language, mode: Mode, is_update: bool) -> String {
    let task = match mode {
        Mode::Text => TEXT_TASK,
        Mode::Vision => VISION_TASK,
    };
    let context = match language {
        Language::De => "GERMAN (DACH region)",
        Language::En => "ENGLISH (international)",
    };
    let rev = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    format!(
        "{ROLE}\n\n{task}\n\n{rules}\n\n{FIELD_RULES}\n\nOUTPUT:\n\
         - Return ONLY the raw vCard. No Markdown fences, no introduction or summary.\n\
         - Start with BEGIN:VCARD and end with END:VCARD.\n\
         - Use VERSION:3.0 and REV:{rev}\n\n\
         LANGUAGE CONTEXT: {context}",
        rules = if is_update { UPDATE_RULES } else { INPUT_RULES },
    )
}

/// Wrap user data so it cannot be confused with instructions.
pub fn with_input(system: &str, input: &str) -> String {
    format!("{system}\n\n--- BEGIN INPUT DATA ---\n{input}\n--- END INPUT DATA ---")
}

/// Input text for an update request.
pub fn update_input(vcard: &str, instructions: &str) -> String {
    format!("EXISTING VCARD:\n{vcard}\n\nUSER INSTRUCTIONS:\n{instructions}")
}

/// Follow-up after an output that was not a vCard.
pub fn rejection(previous: &str) -> String {
    format!(
        "SYSTEM ALERT: Your previous output was REJECTED.\n\
         Reason: missing BEGIN:VCARD or END:VCARD, or invalid format.\n\n\
         Return ONLY the valid vCard 3.0 text.\n\n\
         Previous output:\n{previous}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_and_language() {
        let prompt = system_prompt(Language::De, Mode::Vision, false);
        assert!(prompt.contains("photo of a business card"));
        assert!(prompt.contains("GERMAN"));
        assert!(prompt.contains("INPUT RULES"));
        assert!(prompt.contains("REV:20"));

        let prompt = system_prompt(Language::En, Mode::Text, true);
        assert!(prompt.contains("UPDATE MODE"));
        assert!(!prompt.contains("INPUT RULES"));
        assert!(prompt.contains("ENGLISH"));
    }

    #[test]
    fn test_with_input() {
        let text = with_input("SYS", &update_input("BEGIN:VCARD", "add fax"));
        assert!(text.starts_with("SYS\n\n--- BEGIN INPUT DATA ---\nEXISTING VCARD:\nBEGIN:VCARD"));
        assert!(text.ends_with("USER INSTRUCTIONS:\nadd fax\n--- END INPUT DATA ---"));
    }
}
