//! Boilerplate detection (disclaimers, mobile signatures, navigation labels).

use tracing::debug;

use crate::extract::line::{Line, LineKind};
use crate::models::contact::ContactRecord;

use super::Rule;
use super::patterns::NOISE;

/// Claims boilerplate lines as [`LineKind::Meta`] so later passes ignore them.
#[derive(Debug, Default)]
pub struct NoiseRule;

impl Rule for NoiseRule {
    fn name(&self) -> &'static str {
        "noise"
    }

    fn apply(&self, lines: &mut [Line], _record: &mut ContactRecord) {
        for line in lines.iter_mut().filter(|l| !l.is_consumed()) {
            if NOISE.is_match(&line.clean) {
                debug!("Noise line: {}", line.clean);
                line.claim(LineKind::Meta);
            }
        }
    }
}
