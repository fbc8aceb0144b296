//! Postal address extraction anchored on postal code and city.

use tracing::debug;

use crate::data::leading_city;
use crate::extract::line::{Line, LineKind};
use crate::models::contact::{Address, ContactRecord};

use super::Rule;
use super::patterns::{CITY_AFTER_ZIP, CONTACT_LABEL, HOUSE_NUMBER_END, ZIP_FIVE, ZIP_GENERIC};

/// Country for a postal prefix such as `CH-` (without the dash).
pub fn country_for_prefix(prefix: &str) -> Option<&'static str> {
    let country = match prefix.to_uppercase().as_str() {
        "A" => "Österreich",
        "CH" => "Schweiz",
        "D" => "Deutschland",
        "BE" => "Belgien",
        "PL" => "Polen",
        "CZ" => "Tschechien",
        "NL" => "Niederlande",
        "FR" => "Frankreich",
        "IT" => "Italien",
        "ES" => "Spanien",
        "DK" => "Dänemark",
        "SE" => "Schweden",
        "NO" => "Norwegen",
        "FI" => "Finnland",
        _ => return None,
    };
    Some(country)
}

/// Records the first address found; the preceding line may supply the street.
#[derive(Debug)]
pub struct AddressRule {
    kind: String,
    default_country: String,
}

impl AddressRule {
    pub fn new() -> Self {
        Self {
            kind: "WORK".to_string(),
            default_country: "Deutschland".to_string(),
        }
    }

    /// Set the `TYPE` given to extracted addresses.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Set the country used when neither prefix nor text names one.
    pub fn with_default_country(mut self, country: impl Into<String>) -> Self {
        self.default_country = country.into();
        self
    }

    /// German anchor: five digits followed by a known city.
    fn anchored(&self, text: &str) -> Option<Address> {
        ZIP_FIVE.captures_iter(text).find_map(|caps| {
            let whole = caps.get(0)?;
            let city = leading_city(&text[whole.end()..])?;
            Some(Address {
                street: street_before(&text[..whole.start()]),
                city: city.to_string(),
                zip: caps[1].to_string(),
                country: "Deutschland".to_string(),
                ..Address::default()
            })
        })
    }

    /// Any 4-5 digit code with an optional country prefix and a city after it.
    fn generic(&self, text: &str) -> Option<Address> {
        ZIP_GENERIC.captures_iter(text).find_map(|caps| {
            let whole = caps.get(0)?;
            let rest = text[whole.end()..].trim_start();
            let city = CITY_AFTER_ZIP.captures(rest)?.get(1)?.as_str().trim();
            if city.is_empty() {
                return None;
            }

            let country = caps
                .get(1)
                .and_then(|p| country_for_prefix(p.as_str().trim_end_matches('-')))
                .map(str::to_string)
                .unwrap_or_else(|| self.country_from_text(text));

            Some(Address {
                street: street_before(&text[..whole.start()]),
                city: city.to_string(),
                zip: caps[2].to_string(),
                country,
                ..Address::default()
            })
        })
    }

    fn country_from_text(&self, text: &str) -> String {
        if text.contains("Schweiz") {
            "Schweiz".to_string()
        } else if text.contains("Österreich") {
            "Österreich".to_string()
        } else {
            self.default_country.clone()
        }
    }
}

impl Default for AddressRule {
    fn default() -> Self {
        Self::new()
    }
}

/// Street text preceding the postal code on the same line, if plausible.
fn street_before(prefix: &str) -> String {
    let street = prefix.trim().trim_end_matches(',').trim_end();
    if street.chars().count() > 3 && !CONTACT_LABEL.is_match(street) {
        street.to_string()
    } else {
        String::new()
    }
}

impl Rule for AddressRule {
    fn name(&self) -> &'static str {
        "address"
    }

    fn apply(&self, lines: &mut [Line], record: &mut ContactRecord) {
        for i in 0..lines.len() {
            if lines[i].is_consumed() {
                continue;
            }
            let clean = lines[i].clean.as_str();
            let Some(mut address) = self.anchored(clean).or_else(|| self.generic(clean)) else {
                continue;
            };
            lines[i].claim(LineKind::Address);

            if address.street.is_empty() && i > 0 {
                let prev = &mut lines[i - 1];
                if !prev.is_consumed() && HOUSE_NUMBER_END.is_match(&prev.clean) {
                    address.street = prev.clean.clone();
                    prev.claim(LineKind::Address);
                }
            }

            debug!("Found address {}", address.format());
            record.add_address(&self.kind, address);
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::rules::run_rule;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_anchor_with_known_city() {
        let (lines, record) = run_rule(&AddressRule::new(), "Hauptstraße 12a\n10115 Berlin");
        let address = &record.addresses[0];
        assert_eq!(address.kind, "WORK");
        assert_eq!(
            address.value,
            Address {
                street: "Hauptstraße 12a".to_string(),
                city: "Berlin".to_string(),
                zip: "10115".to_string(),
                country: "Deutschland".to_string(),
                ..Address::default()
            }
        );
        assert!(lines.iter().all(|l| l.kind() == LineKind::Address));
    }

    #[test]
    fn test_street_on_same_line() {
        let (_, record) = run_rule(&AddressRule::new(), "Marienplatz 1, 80331 München");
        let address = &record.addresses[0].value;
        assert_eq!(address.street, "Marienplatz 1");
        assert_eq!(address.city, "München");
    }

    #[test]
    fn test_swiss_prefix() {
        let (_, record) = run_rule(&AddressRule::new(), "Bahnhofstrasse 1\nCH-8001 Zürich");
        let address = &record.addresses[0].value;
        assert_eq!(address.zip, "8001");
        assert_eq!(address.city, "Zürich");
        assert_eq!(address.country, "Schweiz");
        assert_eq!(address.street, "Bahnhofstrasse 1");
    }

    #[test]
    fn test_unknown_city_falls_back_to_generic() {
        let (_, record) = run_rule(&AddressRule::new(), "Musterstraße 1\n12345 Musterstadt");
        let address = &record.addresses[0].value;
        assert_eq!(address.format(), "Musterstraße 1, 12345 Musterstadt, Deutschland");
    }

    #[test]
    fn test_country_named_in_text() {
        let (_, record) = run_rule(&AddressRule::new(), "1010 Wien, Österreich");
        let address = &record.addresses[0].value;
        assert_eq!(address.city, "Wien");
        assert_eq!(address.country, "Österreich");
    }

    #[test]
    fn test_only_first_address_recorded() {
        let (lines, record) = run_rule(
            &AddressRule::new().with_kind("HOME"),
            "10115 Berlin\n20095 Hamburg",
        );
        assert_eq!(record.addresses.len(), 1);
        assert_eq!(record.addresses[0].kind, "HOME");
        assert!(!lines[1].is_consumed());
    }

    #[test]
    fn test_country_prefixes() {
        assert_eq!(country_for_prefix("a"), Some("Österreich"));
        assert_eq!(country_for_prefix("NL"), Some("Niederlande"));
        assert_eq!(country_for_prefix("XX"), None);
    }
}
