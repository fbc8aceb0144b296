//! Fallback assignment of organization and name from unclaimed lines.

use tracing::debug;

use crate::extract::line::{Line, LineKind};
use crate::models::contact::ContactRecord;

use super::Rule;

const MIN_LEFTOVER_LEN: usize = 3;

/// Fills organization, then name, from the remaining unclaimed lines.
#[derive(Debug, Default)]
pub struct LeftoverRule;

fn next_leftover(lines: &mut [Line]) -> Option<&mut Line> {
    lines
        .iter_mut()
        .find(|l| !l.is_consumed() && l.clean.chars().count() >= MIN_LEFTOVER_LEN)
}

impl Rule for LeftoverRule {
    fn name(&self) -> &'static str {
        "leftovers"
    }

    fn apply(&self, lines: &mut [Line], record: &mut ContactRecord) {
        if !record.has_organization() {
            if let Some(line) = next_leftover(lines) {
                debug!("Using leftover line {} as organization", line.clean);
                record.organization = Some(line.clean.clone());
                line.claim(LineKind::Org);
            }
        }

        if !record.has_name() {
            if let Some(line) = next_leftover(lines) {
                if line.clean.split_whitespace().count() >= 2 {
                    debug!("Using leftover line {} as name", line.clean);
                    record.set_name(&line.clean);
                    line.claim(LineKind::Name);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::rules::run_rule;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_org_then_name() {
        let (lines, record) = run_rule(&LeftoverRule, "ab\nBäckerei am Markt\nLisa Beispiel");
        assert_eq!(record.organization.as_deref(), Some("Bäckerei am Markt"));
        assert_eq!(record.full_name.as_deref(), Some("Lisa Beispiel"));
        assert!(!lines[0].is_consumed());
        assert_eq!(lines[2].kind(), LineKind::Name);
    }

    #[test]
    fn test_single_word_is_not_a_name() {
        let (lines, record) = run_rule(&LeftoverRule, "Bäckerei\nWillkommen");
        assert_eq!(record.organization.as_deref(), Some("Bäckerei"));
        assert!(record.full_name.is_none());
        assert!(!lines[1].is_consumed());
    }

    #[test]
    fn test_nothing_left() {
        let (_, record) = run_rule(&LeftoverRule, "");
        assert_eq!(record, ContactRecord::default());
    }
}
