//! Common regex patterns for contact extraction.

use lazy_static::lazy_static;
use regex::{Regex, RegexSet};

lazy_static! {
    // Boilerplate that must never be read as a name or company
    pub static ref NOISE: RegexSet = RegexSet::new([
        r"(?i)sent from my",
        r"(?i)von meinem.*gesendet",
        r"(?i)datenschutz",
        r"(?i)dsgvo|gdpr|privacy policy",
        r"(?i)confidential",
        r"(?i)vertraulich",
        r"(?i)disclaimer",
        r"(?i)please consider the environment",
        r"(?i)bitte denken sie an die umwelt",
        r"(?i)diese (?:e-?mail|nachricht) (?:ist|enthält|kann)",
        r"(?i)this (?:e-?mail|message) (?:is|contains|may contain)",
        r"(?i)unsubscribe|newsletter abbestellen",
        r"(?i)^(?:home|about us|login|logout|impressum|imprint|kontakt|contact|menu|menü|startseite)$",
    ]).unwrap();

    // Email pattern
    pub static ref EMAIL: Regex = Regex::new(
        r"([a-zA-Z0-9_.+-]+)@([a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+)"
    ).unwrap();

    // Bare, www and http(s) host-like tokens
    pub static ref URL: Regex = Regex::new(
        r"(?i)(?:https?://)?(?:www\.)?((?:[a-z0-9-]+\.)+[a-z]{2,})\b(?:/\S*)?"
    ).unwrap();

    // Phone patterns
    pub static ref PHONE_LABEL: Regex = Regex::new(
        r"(?i)tel|phone|mobil|cell|handy|fax|büro|office|zentrale"
    ).unwrap();

    pub static ref PHONE_LOOSE: Regex = Regex::new(
        r"(?:\+?(\d{1,3}))?[-. (]*(\d{3})[-. )]*(\d{3})[-. ]*(\d{4})(?: *x(\d+))?|\+?\d[\d\s\-()/]{6,}\d"
    ).unwrap();

    pub static ref PHONE_STANDALONE: Regex = Regex::new(
        r"^(?:\+|00|0)\d[\d\s\-/]{6,}$"
    ).unwrap();

    pub static ref GERMAN_MOBILE: Regex = Regex::new(r"^01[567]").unwrap();

    pub static ref DATE_DMY: Regex = Regex::new(r"\d{2}\.\d{2}\.\d{4}").unwrap();

    // Postal code patterns
    pub static ref ZIP_FIVE: Regex = Regex::new(r"\b(\d{5})\s+").unwrap();

    pub static ref ZIP_GENERIC: Regex = Regex::new(
        r"(?i)(?:\s|^)(A-|CH-|D-|BE-|PL-|CZ-|NL-|FR-|IT-|ES-|DK-|SE-|NO-|FI-)?(\d{4,5})(?:\s|$)"
    ).unwrap();

    pub static ref CITY_AFTER_ZIP: Regex = Regex::new(r"^(\p{L}[\p{L}\s.\-]*)").unwrap();

    pub static ref HOUSE_NUMBER_END: Regex = Regex::new(r"\d+[a-zA-Z]?$").unwrap();

    pub static ref CONTACT_LABEL: Regex = Regex::new(r"(?i)tel|fax|mail").unwrap();

    // Job titles; `Inh.` ends in a dot so it cannot carry a trailing word boundary
    pub static ref JOB_TITLE: Regex = Regex::new(
        r"(?i)\b(Inh\.|(?:Geschäftsführerin|Geschäftsführung|Geschäftsführer|Inhaberin|Inhaber|Vorstände|Vorstand|Gesellschafterin|Gesellschafter|Prokuristin|Prokurist|Managing Director|Manager|Director|CEO|CTO|CFO|COO|Co-Founder|Founder|Gründerin|Gründer)\b)"
    ).unwrap();

    // Tax identifiers
    pub static ref VAT_ID: Regex = Regex::new(
        r"(?i)\b(?:ust|umsatz)\S*[\s:]\s*(DE\s?.*\d)"
    ).unwrap();

    pub static ref TAX_NUMBER: Regex = Regex::new(
        r"(?i)\b(?:steuer(?:nummer|nr|-nr|-nummer)?|st\.?-?nr)\.?\s*:?\s*(\d[\d\s/]*\d)"
    ).unwrap();

    // Legal forms
    pub static ref LEGAL_FORM: Regex = Regex::new(
        r"(?:^|\s)(AG|SE|eG|e\.K\.|e\.Kfr\.|e\.V\.|GbR|gGmbH|GmbH|mbH|KGaA|KdöR|AöR|KG|OHG|PartG mbB|PartG|UG|S\.A\.|B\.V\.|N\.V\.|SARL|S\.r\.l\.|Sp\. z o\.o\.|(?i:gmbh|inc\.?|ltd\.?|llc|corp\.?|limited|plc))(?:$|\s|[.,)])"
    ).unwrap();

    // "Geschäftsführer: Max Mustermann"
    pub static ref CONTEXT_NAME: Regex = Regex::new(
        r"(?i:\b(?:Geschäftsführerin|Geschäftsführer|Inhaberin|Inhaber|Vorstand|GF|CEO|Managing Director|Director|Gründerin|Gründer|Founder|vertreten durch))(?:\s*:\s*|\s+)(\p{Lu}\p{Ll}+(?:-\p{Lu}\p{Ll}+)*(?:\s+\p{Lu}\p{Ll}+(?:-\p{Lu}\p{Ll}+)*)+)"
    ).unwrap();

    pub static ref CAPITALIZED: Regex = Regex::new(r"^\p{Lu}").unwrap();

    pub static ref NAME_FORBIDDEN: Regex = Regex::new(r"[\d@:;]").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_title_needs_word_start() {
        assert!(JOB_TITLE.is_match("CEO"));
        assert!(JOB_TITLE.is_match("Inh. Max Mustermann"));
        assert!(!JOB_TITLE.is_match("Doctor of Medicine"));
        assert!(!JOB_TITLE.is_match("Directory"));
    }

    #[test]
    fn test_legal_form_variants() {
        assert!(LEGAL_FORM.is_match("Musterfirma GmbH"));
        assert!(LEGAL_FORM.is_match("Hidden Champion Inc."));
        assert!(LEGAL_FORM.is_match("Muster GmbH & Co. KG"));
        assert!(LEGAL_FORM.is_match("Turnverein e.V."));
        assert!(!LEGAL_FORM.is_match("Gewicht 5 kg"));
        assert!(!LEGAL_FORM.is_match("Max Mustermann"));
    }

    #[test]
    fn test_vat_and_tax_number() {
        let caps = VAT_ID.captures("USt-IdNr.: DE 123 456 789").unwrap();
        assert_eq!(&caps[1], "DE 123 456 789");
        let caps = TAX_NUMBER.captures("Steuernummer: 12/345/67890").unwrap();
        assert_eq!(&caps[1], "12/345/67890");
        assert!(TAX_NUMBER.captures("Umsatzsteuer-ID: DE123456789").is_none());
    }

    #[test]
    fn test_context_name() {
        let caps = CONTEXT_NAME.captures("Geschäftsführer: Anna Schmidt").unwrap();
        assert_eq!(&caps[1], "Anna Schmidt");
        let caps = CONTEXT_NAME.captures("Vertreten durch Hans-Peter Müller").unwrap();
        assert_eq!(&caps[1], "Hans-Peter Müller");
        assert!(CONTEXT_NAME.captures("Geschäftsführer: anna schmidt").is_none());
    }
}
