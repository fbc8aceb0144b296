//! Job titles and tax identifiers.

use tracing::debug;

use crate::extract::line::{Line, LineKind};
use crate::models::contact::ContactRecord;

use super::Rule;
use super::patterns::{JOB_TITLE, TAX_NUMBER, VAT_ID};

/// Characters a line may carry beyond the keyword and still count as a bare title.
const TITLE_SLACK: usize = 10;

/// Records a job title and appends VAT IDs and tax numbers to the notes.
///
/// A line holding more than a title (`Geschäftsführer: Max Mustermann`) is
/// tagged [`LineKind::Job`] but left unclaimed for the contextual name pass.
#[derive(Debug, Default)]
pub struct JobAndTaxRule;

impl JobAndTaxRule {
    fn job_title(line: &mut Line, record: &mut ContactRecord) {
        let Some(keyword) = JOB_TITLE.captures(&line.clean).and_then(|c| c.get(1)) else {
            return;
        };
        let keyword = keyword.as_str().to_string();

        if line.clean.chars().count() < keyword.chars().count() + TITLE_SLACK {
            if record.job_title.is_none() {
                record.job_title = Some(line.clean.clone());
            }
            line.claim(LineKind::Job);
        } else {
            if record.job_title.is_none() {
                record.job_title = Some(keyword);
            }
            line.tag(LineKind::Job);
        }
        debug!("Job title line: {}", line.clean);
    }

    fn tax_ids(line: &mut Line, record: &mut ContactRecord) {
        if let Some(caps) = VAT_ID.captures(&line.clean) {
            let id: String = caps[1]
                .chars()
                .filter(|c| !c.is_whitespace() && *c != '/')
                .collect();
            debug!("Found VAT ID {}", id);
            record.notes.push(format!("UStID: {}", id));
            line.claim(LineKind::Meta);
        } else if let Some(caps) = TAX_NUMBER.captures(&line.clean) {
            debug!("Found tax number {}", &caps[1]);
            record.notes.push(format!("StNr: {}", &caps[1]));
            line.claim(LineKind::Meta);
        }
    }
}

impl Rule for JobAndTaxRule {
    fn name(&self) -> &'static str {
        "job_and_tax"
    }

    fn apply(&self, lines: &mut [Line], record: &mut ContactRecord) {
        for line in lines.iter_mut().filter(|l| !l.is_consumed()) {
            Self::job_title(line, record);
            Self::tax_ids(line, record);
        }
    }
}
