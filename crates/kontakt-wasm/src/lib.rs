//! WASM bindings for kontakt.
//!
//! Runs the extraction engine and the vCard codec locally in browsers and
//! Node.js, so contact text never has to leave the device.

use wasm_bindgen::prelude::*;

use kontakt_core::extract::ContactParser;
use kontakt_core::models::ExtractionConfig;
use kontakt_core::readable::to_readable_text;
use kontakt_core::{ImpressumParser, Language, VCardData, VCardWriter};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract a contact from imprint, signature or card text and return vCard text.
#[wasm_bindgen]
pub fn extract_vcard(text: &str) -> String {
    kontakt_core::parse_impressum_to_vcard(text)
}

/// Parse vCard text into `{ raw, data, isValid }`.
#[wasm_bindgen]
pub fn parse_vcard(text: &str) -> Result<JsValue, JsValue> {
    to_js(&kontakt_core::parse_vcard(text))
}

/// Serialize contact data (as returned in `parse_vcard(...).data`) to vCard text.
#[wasm_bindgen]
pub fn generate_vcard(data: JsValue) -> Result<String, JsValue> {
    let data: VCardData =
        serde_wasm_bindgen::from_value(data).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(kontakt_core::generate_vcard(&data))
}

#[wasm_bindgen]
pub fn normalize_phone(raw: &str) -> String {
    kontakt_core::normalize_phone(raw)
}

/// Whether the text contains both `BEGIN:VCARD` and `END:VCARD`.
#[wasm_bindgen]
pub fn is_vcard(text: &str) -> bool {
    kontakt_core::looks_like_vcard(text)
}

/// Render vCard text as labelled lines. `lang` is `de` or `en`; anything else means `de`.
#[wasm_bindgen]
pub fn readable_text(vcard: &str, lang: &str) -> String {
    to_readable_text(vcard, Language::from_code(lang).unwrap_or_default())
}

/// Configurable extractor for browser use.
#[wasm_bindgen]
pub struct ContactExtractor {
    config: ExtractionConfig,
    charset: bool,
}

#[wasm_bindgen]
impl ContactExtractor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
            charset: true,
        }
    }

    /// Country used for postal codes without a country hint.
    #[wasm_bindgen]
    pub fn set_default_country(&mut self, country: &str) {
        self.config.default_country = country.to_string();
    }

    /// Whether text properties carry `CHARSET=utf-8`.
    #[wasm_bindgen]
    pub fn set_charset(&mut self, charset: bool) {
        self.charset = charset;
    }

    fn parser(&self) -> ImpressumParser {
        ImpressumParser::from_config(&self.config)
            .with_writer(VCardWriter::new().with_charset(self.charset))
    }

    /// Extract and return vCard text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> String {
        self.parser().to_vcard(text)
    }

    /// Extract and return the contact record, the classified lines and timing.
    #[wasm_bindgen]
    pub fn extract_with_metadata(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser().parse(text))
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_extract_vcard() {
        let vcard = extract_vcard("Max Mustermann\nMusterfirma GmbH\nTel: +49 30 1234567");
        assert!(is_vcard(&vcard));
        assert!(vcard.contains("FN;CHARSET=utf-8:Max Mustermann"));
    }

    #[wasm_bindgen_test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("+49 (0) 30 / 123-456"), "+49 30 123 456");
    }

    #[wasm_bindgen_test]
    fn test_readable_text() {
        let text = readable_text("BEGIN:VCARD\nFN:Max Mustermann\nEND:VCARD", "en");
        assert_eq!(text.trim(), "Name: Max Mustermann");
        assert_eq!(readable_text("no card", "xx"), "no card");
    }

    #[wasm_bindgen_test]
    fn test_extractor_settings() {
        let mut extractor = ContactExtractor::new();
        extractor.set_charset(false);
        extractor.set_default_country("Österreich");
        let vcard = extractor.extract("Beispiel GmbH\nHauptplatz 1\n9020 Klagenfurt");
        assert!(vcard.contains("\nORG:Beispiel GmbH\n"));
        assert!(!vcard.contains("CHARSET"));
    }
}
