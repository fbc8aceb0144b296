//! Contact record built up by the extraction passes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::vcard::VCardData;

/// A value tagged with a vCard `TYPE` token (e.g. `WORK`, `CELL`, `LINKEDIN`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typed<T> {
    /// The `TYPE` parameter value. May hold a comma-separated list such as `WORK,VOICE`.
    #[serde(rename = "type")]
    pub kind: String,

    /// The property value.
    pub value: T,
}

impl<T> Typed<T> {
    pub fn new(kind: impl Into<String>, value: T) -> Self {
        Self {
            kind: kind.into(),
            value,
        }
    }
}

/// Postal address using the retained slots of the vCard `ADR` property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    /// Street name and house number.
    pub street: String,

    /// City or locality.
    pub city: String,

    /// Region, state or canton.
    pub region: String,

    /// Postal code.
    pub zip: String,

    /// Country name.
    pub country: String,
}

impl Address {
    /// Check if the address has any data.
    pub fn is_empty(&self) -> bool {
        self.street.is_empty()
            && self.city.is_empty()
            && self.region.is_empty()
            && self.zip.is_empty()
            && self.country.is_empty()
    }

    /// Format the address as a single line: `street, zip city, country`.
    pub fn format(&self) -> String {
        let locality = format!("{} {}", self.zip, self.city);
        [self.street.as_str(), locality.trim(), self.country.as_str()]
            .into_iter()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Structured name in vCard `N` order: family;given;middle;prefix;suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredName {
    pub family: String,
    pub given: String,
    pub middle: String,
    pub prefix: String,
    pub suffix: String,
}

impl StructuredName {
    /// Create a name from family and given parts.
    pub fn new(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            given: given.into(),
            ..Self::default()
        }
    }

    /// Parse an `N` property value. Missing components stay empty.
    pub fn parse(value: &str) -> Self {
        let mut parts = value.split(';').map(|p| p.trim().to_string());
        Self {
            family: parts.next().unwrap_or_default(),
            given: parts.next().unwrap_or_default(),
            middle: parts.next().unwrap_or_default(),
            prefix: parts.next().unwrap_or_default(),
            suffix: parts.next().unwrap_or_default(),
        }
    }

    /// Derive a name from a whitespace-separated display name.
    ///
    /// The first token is the given name, the last token the family name and
    /// anything in between goes to `middle`. A single token is treated as a
    /// given name.
    pub fn from_full_name(full_name: &str) -> Option<Self> {
        let tokens: Vec<&str> = full_name.split_whitespace().collect();
        match tokens.as_slice() {
            [] => None,
            [single] => Some(Self::new("", *single)),
            [given, middle @ .., family] => Some(Self {
                family: (*family).to_string(),
                given: (*given).to_string(),
                middle: middle.join(" "),
                ..Self::default()
            }),
        }
    }

    /// Join the parts as `prefix given middle family suffix`, skipping empty parts.
    pub fn display_name(&self) -> String {
        [
            &self.prefix,
            &self.given,
            &self.middle,
            &self.family,
            &self.suffix,
        ]
        .into_iter()
        .filter(|p| !p.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.display_name().is_empty()
    }
}

impl fmt::Display for StructuredName {
    /// Writes the `N` value with trailing empty components dropped (`Schmidt;Anna`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = [
            &self.family,
            &self.given,
            &self.middle,
            &self.prefix,
            &self.suffix,
        ]
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(";");
        f.write_str(joined.trim_end_matches(';'))
    }
}

/// Accumulator filled by the heuristic extraction passes.
///
/// Collections keep insertion order; the first entry is treated as primary
/// by consumers. Duplicate values within one collection are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_name: Option<StructuredName>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    pub phones: Vec<Typed<String>>,
    pub emails: Vec<Typed<String>>,
    pub urls: Vec<Typed<String>>,
    pub addresses: Vec<Typed<Address>>,

    /// Free-text fragments (tax IDs, context), joined by newlines on output.
    pub notes: Vec<String>,
}

impl ContactRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_name(&self) -> bool {
        self.full_name.as_deref().is_some_and(|n| !n.is_empty())
    }

    pub fn has_organization(&self) -> bool {
        self.organization.as_deref().is_some_and(|o| !o.is_empty())
    }

    /// Record a person's name from a display string, deriving the structured name.
    pub fn set_name(&mut self, full_name: &str) {
        let full_name = full_name.split_whitespace().collect::<Vec<_>>().join(" ");
        self.structured_name = StructuredName::from_full_name(&full_name);
        self.full_name = Some(full_name);
    }

    /// Add a phone number. Returns `false` if the value is already present.
    pub fn add_phone(&mut self, kind: &str, value: impl Into<String>) -> bool {
        push_unique(&mut self.phones, kind, value.into())
    }

    /// Add an email address. Returns `false` if the value is already present.
    pub fn add_email(&mut self, kind: &str, value: impl Into<String>) -> bool {
        push_unique(&mut self.emails, kind, value.into())
    }

    /// Add a URL. Returns `false` if the value is already present.
    pub fn add_url(&mut self, kind: &str, value: impl Into<String>) -> bool {
        push_unique(&mut self.urls, kind, value.into())
    }

    pub fn add_address(&mut self, kind: &str, address: Address) {
        if !self.addresses.iter().any(|a| a.value == address) {
            self.addresses.push(Typed::new(kind, address));
        }
    }

    /// Whether any recorded URL already refers to `domain` (case-insensitive).
    pub fn has_url_for(&self, domain: &str) -> bool {
        let domain = domain.to_lowercase();
        self.urls
            .iter()
            .any(|u| u.value.to_lowercase().contains(&domain))
    }

    /// Convert into the vCard editing model.
    pub fn to_vcard_data(&self) -> VCardData {
        VCardData {
            full_name: self.full_name.clone().filter(|s| !s.is_empty()),
            n: self
                .structured_name
                .as_ref()
                .filter(|n| !n.is_empty())
                .map(ToString::to_string),
            org: self.organization.clone().filter(|s| !s.is_empty()),
            title: self.job_title.clone().filter(|s| !s.is_empty()),
            tel: self.phones.clone(),
            email: self.emails.clone(),
            url: self.urls.clone(),
            adr: self.addresses.clone(),
            note: (!self.notes.is_empty()).then(|| self.notes.join("\n")),
            ..VCardData::default()
        }
    }
}

fn push_unique(entries: &mut Vec<Typed<String>>, kind: &str, value: String) -> bool {
    if value.is_empty() || entries.iter().any(|e| e.value == value) {
        return false;
    }
    entries.push(Typed::new(kind, value));
    true
}
