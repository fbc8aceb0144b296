//! Heuristic extraction passes.
//!
//! Each pass inspects the unclaimed lines, writes what it recognizes into the
//! [`ContactRecord`] and claims the lines it used. Passes are not commutative;
//! [`crate::extract::ImpressumParser`] runs them in a fixed order.

pub mod address;
pub mod email;
pub mod job;
pub mod leftovers;
pub mod name;
pub mod noise;
pub mod organization;
pub mod patterns;
pub mod phone;
pub mod url;

pub use address::AddressRule;
pub use email::{EmailRule, GENERIC_PROVIDERS};
pub use job::JobAndTaxRule;
pub use leftovers::LeftoverRule;
pub use name::{ContextNameRule, DictionaryNameRule, PositionalNameRule};
pub use noise::NoiseRule;
pub use organization::OrganizationRule;
pub use phone::{PhoneRule, normalize_phone};
pub use url::UrlRule;

use crate::models::contact::ContactRecord;

use super::line::Line;

/// A single extraction pass over the shared line table.
pub trait Rule: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Inspect `lines`, update `record` and claim what was used.
    ///
    /// Must never panic: absence of a match is simply absence of a field.
    fn apply(&self, lines: &mut [Line], record: &mut ContactRecord);
}

#[cfg(test)]
pub(crate) fn run_rule(rule: &dyn Rule, text: &str) -> (Vec<Line>, ContactRecord) {
    let mut lines = super::line::segment(text);
    let mut record = ContactRecord::new();
    rule.apply(&mut lines, &mut record);
    (lines, record)
}
