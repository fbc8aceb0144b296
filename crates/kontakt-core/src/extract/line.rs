//! Line segmentation and per-line claim state.

use serde::Serialize;

/// Which pass claimed a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    #[default]
    None,
    Email,
    Phone,
    Url,
    Address,
    Job,
    Meta,
    Org,
    Name,
}

/// One unit of segmented input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    /// Untouched source text.
    pub original: String,
    /// Trimmed text used for matching.
    pub clean: String,
    consumed: bool,
    kind: LineKind,
}

impl Line {
    pub fn new(original: &str) -> Self {
        Self {
            original: original.to_string(),
            clean: original.trim().to_string(),
            consumed: false,
            kind: LineKind::None,
        }
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Claim the line for `kind`. Once claimed a line stays claimed.
    pub fn claim(&mut self, kind: LineKind) {
        self.consumed = true;
        self.kind = kind;
    }

    /// Tag an unclaimed line without claiming it, so a later pass can revisit it.
    pub fn tag(&mut self, kind: LineKind) {
        if !self.consumed {
            self.kind = kind;
        }
    }
}

/// Split raw text on CR, LF or CRLF, trim each line and drop empty ones.
pub fn segment(text: &str) -> Vec<Line> {
    text.split("\r\n")
        .flat_map(|chunk| chunk.split(['\r', '\n']))
        .map(Line::new)
        .filter(|line| !line.clean.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_mixed_newlines() {
        let lines = segment("  Max Mustermann \r\nMusterfirma GmbH\r\r\n\n12345 Musterstadt\n   \n");
        let clean: Vec<&str> = lines.iter().map(|l| l.clean.as_str()).collect();
        assert_eq!(clean, vec!["Max Mustermann", "Musterfirma GmbH", "12345 Musterstadt"]);
        assert_eq!(lines[0].original, "  Max Mustermann ");
        assert!(lines.iter().all(|l| !l.is_consumed()));
    }

    #[test]
    fn test_segment_empty_input() {
        assert!(segment("").is_empty());
        assert!(segment("\r\n \n\t").is_empty());
    }

    #[test]
    fn test_claim_is_monotonic() {
        let mut line = Line::new("Geschäftsführer: Anna Schmidt");
        line.tag(LineKind::Job);
        assert!(!line.is_consumed());
        assert_eq!(line.kind(), LineKind::Job);

        line.claim(LineKind::Name);
        line.tag(LineKind::Job);
        assert!(line.is_consumed());
        assert_eq!(line.kind(), LineKind::Name);
    }
}
