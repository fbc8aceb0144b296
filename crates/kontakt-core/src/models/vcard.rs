//! vCard editing model shared by the codec, the CLI and the WASM bindings.

use serde::{Deserialize, Serialize};

use crate::error::VCardError;

use super::contact::{Address, StructuredName, Typed};

/// Contact data shaped after the vCard 3.0 properties this crate reads and writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VCardData {
    /// Formatted display name (`FN`).
    #[serde(rename = "fn", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Raw structured name (`N`), kept verbatim to preserve its components.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bday: Option<String>,

    /// Photo reference. Only URLs survive serialization, never `data:` URIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    pub tel: Vec<Typed<String>>,
    pub email: Vec<Typed<String>>,
    pub url: Vec<Typed<String>>,
    pub adr: Vec<Typed<Address>>,
}

impl VCardData {
    /// The structured name, parsed from `N`.
    pub fn structured_name(&self) -> Option<StructuredName> {
        self.n
            .as_deref()
            .map(StructuredName::parse)
            .filter(|n| !n.is_empty())
    }

    /// Display name: `FN` if set, otherwise synthesized from `N`.
    pub fn display_name(&self) -> Option<String> {
        self.full_name
            .clone()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.structured_name().map(|n| n.display_name()))
    }

    /// Whether the card identifies anyone: a name or an organization.
    pub fn has_content(&self) -> bool {
        self.display_name().is_some() || self.org.as_deref().is_some_and(|o| !o.trim().is_empty())
    }

    /// First phone whose type list contains `kind` (case-insensitive).
    pub fn phone_of_kind(&self, kind: &str) -> Option<&str> {
        let kind = kind.to_uppercase();
        self.tel
            .iter()
            .find(|t| t.kind.to_uppercase().contains(&kind))
            .map(|t| t.value.as_str())
    }
}

/// Result of parsing vCard text: the data plus a validity verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedVCard {
    /// The text that was parsed.
    pub raw: String,

    /// Everything that could be read, even from an invalid card.
    pub data: VCardData,

    /// Both `BEGIN:VCARD` and `END:VCARD` were present.
    #[serde(rename = "isValid")]
    pub is_valid: bool,

    #[serde(skip)]
    pub(crate) defect: Option<VCardError>,
}

impl ParsedVCard {
    /// The structural defect that made this card invalid, if any.
    pub fn defect(&self) -> Option<&VCardError> {
        self.defect.as_ref()
    }

    /// Return the data only if the card is structurally valid.
    pub fn into_valid(self) -> Result<VCardData, VCardError> {
        match self.defect {
            Some(defect) => Err(defect),
            None => Ok(self.data),
        }
    }
}
