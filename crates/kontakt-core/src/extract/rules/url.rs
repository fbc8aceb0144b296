//! Website and social profile extraction.

use tracing::debug;

use crate::extract::line::{Line, LineKind};
use crate::models::contact::ContactRecord;

use super::Rule;
use super::patterns::URL;

/// Platform hosts and the `TYPE` token they map to. Checked in order.
const PLATFORMS: &[(&str, &str)] = &[
    ("linkedin", "LINKEDIN"),
    ("xing", "XING"),
    ("twitter", "TWITTER"),
    ("facebook", "FACEBOOK"),
    ("instagram", "INSTAGRAM"),
    ("github", "GITHUB"),
    ("gitlab", "GITLAB"),
    ("stackoverflow", "STACKOVERFLOW"),
    ("youtube", "YOUTUBE"),
    ("twitch", "TWITCH"),
    ("tiktok", "TIKTOK"),
    ("medium", "MEDIUM"),
];

/// Records host-like tokens as absolute URLs, typed by platform.
#[derive(Debug, Default)]
pub struct UrlRule;

impl Rule for UrlRule {
    fn name(&self) -> &'static str {
        "url"
    }

    fn apply(&self, lines: &mut [Line], record: &mut ContactRecord) {
        for line in lines.iter_mut().filter(|l| !l.is_consumed()) {
            let mut found = false;

            for caps in URL.captures_iter(&line.clean) {
                let Some(whole) = caps.get(0) else { continue };
                let host = &caps[1];
                let token = whole.as_str().trim_end_matches(['.', ',', ';', ')']);
                let lower = token.to_lowercase();
                let explicit = lower.starts_with("http") || lower.starts_with("www.");

                // Bare tokens like "Co.KG" or "Dr.Med" are not hosts.
                let tld = host.rsplit('.').next().unwrap_or_default();
                if !explicit && tld.chars().any(|c| c.is_uppercase()) {
                    continue;
                }

                let url = if lower.starts_with("http") {
                    token.to_string()
                } else {
                    format!("https://{}", token)
                };
                let kind = classify(host);
                debug!("Found {} url {}", kind, url);
                record.add_url(kind, url);
                found = true;
            }

            if found {
                line.claim(LineKind::Url);
            }
        }
    }
}

/// Map a host to a platform `TYPE`, defaulting to `WORK`.
pub fn classify(host: &str) -> &'static str {
    let host = host.to_lowercase();
    if host == "x.com" || host.ends_with(".x.com") {
        return "TWITTER";
    }
    PLATFORMS
        .iter()
        .find(|(needle, _)| host.contains(needle))
        .map(|(_, kind)| *kind)
        .unwrap_or("WORK")
}
