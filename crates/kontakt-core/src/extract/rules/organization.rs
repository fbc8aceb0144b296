//! Organization detection by legal form.

use tracing::debug;

use crate::extract::line::{Line, LineKind};
use crate::models::contact::ContactRecord;

use super::Rule;
use super::patterns::LEGAL_FORM;

/// The first unclaimed line carrying a legal form becomes the organization.
#[derive(Debug, Default)]
pub struct OrganizationRule;

impl Rule for OrganizationRule {
    fn name(&self) -> &'static str {
        "organization"
    }

    fn apply(&self, lines: &mut [Line], record: &mut ContactRecord) {
        if record.has_organization() {
            return;
        }
        if let Some(line) = lines
            .iter_mut()
            .find(|l| !l.is_consumed() && LEGAL_FORM.is_match(&l.clean))
        {
            debug!("Found organization {}", line.clean);
            record.organization = Some(line.clean.clone());
            line.claim(LineKind::Org);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::rules::run_rule;

    #[test]
    fn test_first_legal_form_wins() {
        let (lines, record) = run_rule(
            &OrganizationRule,
            "Max Mustermann\nMusterfirma GmbH\nHolding AG",
        );
        assert_eq!(record.organization.as_deref(), Some("Musterfirma GmbH"));
        assert_eq!(lines[1].kind(), LineKind::Org);
        assert!(!lines[2].is_consumed());
    }

    #[test]
    fn test_international_forms() {
        let (_, record) = run_rule(&OrganizationRule, "Acme Widgets Ltd.");
        assert_eq!(record.organization.as_deref(), Some("Acme Widgets Ltd."));
    }

    #[test]
    fn test_no_legal_form() {
        let (lines, record) = run_rule(&OrganizationRule, "Bäckerei am Markt");
        assert!(record.organization.is_none());
        assert!(!lines[0].is_consumed());
    }
}
