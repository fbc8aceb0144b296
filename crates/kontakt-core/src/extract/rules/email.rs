//! Email extraction and company URL inference from the mail domain.

use std::collections::HashSet;

use tracing::debug;

use crate::extract::line::{Line, LineKind};
use crate::models::contact::ContactRecord;

use super::Rule;
use super::patterns::EMAIL;

/// Consumer mail domains that say nothing about the sender's company.
pub const GENERIC_PROVIDERS: &[&str] = &[
    "gmail.com", "googlemail.com", "gmx.de", "gmx.net", "gmx.at", "gmx.ch", "web.de",
    "yahoo.com", "yahoo.de", "hotmail.com", "hotmail.de", "outlook.com", "outlook.de",
    "live.com", "live.de", "icloud.com", "me.com", "mac.com", "t-online.de", "aol.com",
    "protonmail.com", "proton.me", "freenet.de", "posteo.de", "mailbox.org",
];

/// Records emails as `WORK,INTERNET` and synthesizes `www.<domain>` URLs for
/// non-generic domains.
#[derive(Debug)]
pub struct EmailRule {
    generic_providers: HashSet<String>,
}

impl EmailRule {
    pub fn new() -> Self {
        Self {
            generic_providers: GENERIC_PROVIDERS.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Treat additional domains as generic providers.
    pub fn with_generic_providers<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.generic_providers
            .extend(domains.into_iter().map(|d| d.as_ref().trim().to_lowercase()));
        self
    }

    pub fn is_generic(&self, domain: &str) -> bool {
        self.generic_providers.contains(&domain.to_lowercase())
    }
}

impl Default for EmailRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for EmailRule {
    fn name(&self) -> &'static str {
        "email"
    }

    fn apply(&self, lines: &mut [Line], record: &mut ContactRecord) {
        for line in lines.iter_mut().filter(|l| !l.is_consumed()) {
            let mut found = false;

            for caps in EMAIL.captures_iter(&line.clean) {
                found = true;
                let domain = caps[2].trim_end_matches(['.', '-']);
                let email = format!("{}@{}", &caps[1], domain);
                debug!("Found email {}", email);
                record.add_email("WORK,INTERNET", email);

                if !self.is_generic(domain) && !record.has_url_for(domain) {
                    record.add_url("WORK", format!("www.{}", domain));
                }
            }

            if found {
                line.claim(LineKind::Email);
            }
        }
    }
}
