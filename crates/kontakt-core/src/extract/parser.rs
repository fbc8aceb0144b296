//! Ordered pipeline of extraction passes.

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::contact::ContactRecord;
use crate::vcard::VCardWriter;

use super::ContactParser;
use super::line::{Line, segment};
use super::rules::{
    AddressRule, ContextNameRule, DictionaryNameRule, EmailRule, JobAndTaxRule, LeftoverRule,
    NoiseRule, OrganizationRule, PhoneRule, PositionalNameRule, Rule, UrlRule,
};

/// Result of contact extraction.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Extracted contact data.
    pub record: ContactRecord,
    /// Segmented input with the claim state each pass left behind.
    pub lines: Vec<Line>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl ExtractionResult {
    /// Lines no pass could interpret.
    pub fn unclaimed(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|l| !l.is_consumed())
    }
}

/// Rule-based parser for imprints, signatures and business card text.
///
/// The passes are not commutative: noise must go before everything, email
/// before generic URLs, job/tax before the name passes and the address pass
/// before the leftover fallback.
pub struct ImpressumParser {
    rules: Vec<Box<dyn Rule>>,
    writer: VCardWriter,
}

impl ImpressumParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create a parser from the extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(NoiseRule),
            Box::new(EmailRule::new().with_generic_providers(&config.extra_generic_providers)),
            Box::new(UrlRule),
            Box::new(
                PhoneRule::new()
                    .with_min_digits(config.min_phone_digits, config.min_standalone_phone_digits),
            ),
            Box::new(
                AddressRule::new()
                    .with_kind(config.address_kind.clone())
                    .with_default_country(config.default_country.clone()),
            ),
            Box::new(JobAndTaxRule),
            Box::new(OrganizationRule),
            Box::new(ContextNameRule),
            Box::new(DictionaryNameRule),
            Box::new(PositionalNameRule),
            Box::new(LeftoverRule),
        ];
        Self {
            rules,
            writer: VCardWriter::new(),
        }
    }

    /// Set the writer used by [`ImpressumParser::to_vcard`].
    pub fn with_writer(mut self, writer: VCardWriter) -> Self {
        self.writer = writer;
        self
    }

    /// Names of the passes in execution order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Extract a contact and serialize it as vCard 3.0.
    pub fn to_vcard(&self, text: &str) -> String {
        let result = self.parse(text);
        self.writer.write(&result.record.to_vcard_data())
    }
}

impl Default for ImpressumParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactParser for ImpressumParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Utc::now();
        info!("Extracting contact from {} characters of text", text.len());

        let mut lines = segment(text);
        let mut record = ContactRecord::new();

        for rule in &self.rules {
            rule.apply(&mut lines, &mut record);
            debug!(
                "After {} pass: {} of {} lines claimed",
                rule.name(),
                lines.iter().filter(|l| l.is_consumed()).count(),
                lines.len()
            );
        }

        ExtractionResult {
            record,
            lines,
            processing_time_ms: (Utc::now() - start).num_milliseconds().max(0) as u64,
        }
    }
}

/// Extract a contact from `text` with default settings and return vCard text.
pub fn parse_impressum_to_vcard(text: &str) -> String {
    ImpressumParser::new().to_vcard(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::LineKind;
    use crate::vcard::parse_vcard;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_signature() {
        let text = "Max Mustermann\nMusterfirma GmbH\nMusterstraße 1\n12345 Musterstadt\nTel: +49 30 1234567";
        let vcard = parse_impressum_to_vcard(text);

        assert!(vcard.starts_with("BEGIN:VCARD\nVERSION:3.0\n"));
        assert!(vcard.ends_with("END:VCARD"));
        assert!(vcard.contains("FN;CHARSET=utf-8:Max Mustermann"));
        assert!(vcard.contains("ORG;CHARSET=utf-8:Musterfirma GmbH"));
        assert!(vcard.contains("TYPE=WORK,VOICE:+49 30 1234567"));
        assert!(vcard.contains(";Musterstadt;;12345;Deutschland"));

        let parsed = parse_vcard(&vcard);
        assert!(parsed.is_valid);
        assert_eq!(parsed.data.full_name.as_deref(), Some("Max Mustermann"));
        assert_eq!(parsed.data.org.as_deref(), Some("Musterfirma GmbH"));
        assert_eq!(parsed.data.tel[0].kind, "WORK");
        assert_eq!(parsed.data.tel[0].value, "+49 30 1234567");
        assert_eq!(parsed.data.adr[0].value.street, "Musterstraße 1");
    }

    #[test]
    fn test_swiss_address() {
        let result = ImpressumParser::new().parse("Beispiel AG\nBahnhofstrasse 10\nCH-8001 Zürich");
        let address = &result.record.addresses[0].value;
        assert_eq!(address.country, "Schweiz");
        assert_eq!(address.zip, "8001");
        assert_eq!(address.city, "Zürich");
        assert_eq!(result.record.organization.as_deref(), Some("Beispiel AG"));
    }

    #[test]
    fn test_generic_provider_email() {
        let record = ImpressumParser::new().parse("john@gmail.com").record;
        assert_eq!(record.emails.len(), 1);
        assert_eq!(record.emails[0].kind, "WORK,INTERNET");
        assert!(record.urls.is_empty());
    }

    #[test]
    fn test_company_email_yields_url() {
        let record = ImpressumParser::new().parse("jane@acme.io").record;
        assert_eq!(record.emails[0].value, "jane@acme.io");
        assert_eq!(record.urls.len(), 1);
        assert_eq!(record.urls[0].value, "www.acme.io");
    }

    #[test]
    fn test_role_prefixed_name() {
        let result = ImpressumParser::new().parse("Geschäftsführer: Anna Schmidt");
        let record = &result.record;
        assert_eq!(record.full_name.as_deref(), Some("Anna Schmidt"));
        assert_eq!(
            record.structured_name.as_ref().map(ToString::to_string).as_deref(),
            Some("Schmidt;Anna")
        );
        assert_eq!(record.job_title.as_deref(), Some("Geschäftsführer"));
        assert_eq!(result.lines[0].kind(), LineKind::Name);
    }

    #[test]
    fn test_empty_input() {
        let vcard = parse_impressum_to_vcard("");
        let lines: Vec<&str> = vcard.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "BEGIN:VCARD");
        assert_eq!(lines[1], "VERSION:3.0");
        assert!(lines[2].starts_with("REV:"));
        assert_eq!(lines[3], "END:VCARD");
    }

    #[test]
    fn test_imprint_page() {
        let text = "\
Impressum
Angaben gemäß § 5 TMG
Beispiel Software GmbH
Musterweg 7
80331 München
Vertreten durch: Dr. Hans Müller
Geschäftsführerin: Lisa Beispiel
Telefon: 089 / 123 456-0
Telefax: 089 / 123 456-99
E-Mail: info@beispiel-software.de
Registergericht: Amtsgericht München
USt-IdNr.: DE 123 456 789
Datenschutzerklärung";
        let result = ImpressumParser::new().parse(text);
        let record = &result.record;

        assert_eq!(record.organization.as_deref(), Some("Beispiel Software GmbH"));
        assert_eq!(record.full_name.as_deref(), Some("Lisa Beispiel"));
        assert_eq!(record.emails[0].value, "info@beispiel-software.de");
        assert_eq!(record.urls[0].value, "www.beispiel-software.de");
        assert_eq!(record.phones[0].kind, "WORK,VOICE");
        assert_eq!(record.phones[0].value, "089 123 456 0");
        assert_eq!(record.phones[1].kind, "FAX");
        assert_eq!(record.addresses[0].value.street, "Musterweg 7");
        assert_eq!(record.addresses[0].value.city, "München");
        assert_eq!(record.notes, vec!["UStID: DE123456789".to_string()]);
        assert_eq!(result.lines[0].kind(), LineKind::Meta);
    }

    #[test]
    fn test_hostile_input_never_panics() {
        let parser = ImpressumParser::new();
        let long_line = "1".repeat(50_000);
        let inputs = [
            "\u{0}\u{1}\u{fffd}\u{fffd}",
            "@@@@ :::: ;;;; ....",
            "\r\r\n\n\r",
            long_line.as_str(),
            "ü0ß\u{200b}@x.y",
        ];
        for input in inputs {
            let vcard = parser.to_vcard(input);
            assert!(vcard.starts_with("BEGIN:VCARD"));
            assert!(vcard.ends_with("END:VCARD"));
        }
    }

    #[test]
    fn test_parser_is_reusable() {
        let parser = ImpressumParser::new();
        let first = parser.parse("jane@acme.io").record;
        let second = parser.parse("john@gmail.com").record;
        assert_eq!(first.emails.len(), 1);
        assert_eq!(second.emails.len(), 1);
        assert!(second.urls.is_empty());
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(
            ImpressumParser::new().rule_names(),
            vec![
                "noise",
                "email",
                "url",
                "phone",
                "address",
                "job_and_tax",
                "organization",
                "context_name",
                "dictionary_name",
                "positional_name",
                "leftovers",
            ]
        );
    }
}
