//! Person name passes: contextual, dictionary and positional.
//!
//! The passes run in that order and the first one to find a name wins.

use tracing::debug;

use crate::data::is_first_name;
use crate::extract::line::{Line, LineKind};
use crate::models::contact::ContactRecord;

use super::Rule;
use super::patterns::{CAPITALIZED, CONTEXT_NAME, NAME_FORBIDDEN};

const MAX_NAME_LEN: usize = 40;

fn strip_punctuation(word: &str) -> &str {
    word.trim_matches(|c: char| matches!(c, ',' | ';' | '.' | ':' | '(' | ')' | '"'))
}

/// `Geschäftsführer: Max Mustermann` and similar role-prefixed names.
///
/// Also inspects lines the job pass tagged but left open.
#[derive(Debug, Default)]
pub struct ContextNameRule;

impl Rule for ContextNameRule {
    fn name(&self) -> &'static str {
        "context_name"
    }

    fn apply(&self, lines: &mut [Line], record: &mut ContactRecord) {
        if record.has_name() {
            return;
        }
        for line in lines
            .iter_mut()
            .filter(|l| !l.is_consumed() || l.kind() == LineKind::Job)
        {
            let Some(name) = CONTEXT_NAME.captures(&line.clean).and_then(|c| c.get(1)) else {
                continue;
            };
            debug!("Found name {} after role keyword", name.as_str());
            record.set_name(name.as_str());
            if !line.is_consumed() {
                line.claim(LineKind::Name);
            }
            return;
        }
    }
}

/// A known given name followed by a capitalized surname.
#[derive(Debug, Default)]
pub struct DictionaryNameRule;

impl DictionaryNameRule {
    fn find_name(text: &str) -> Option<String> {
        let words: Vec<&str> = text.split_whitespace().map(strip_punctuation).collect();

        for (i, word) in words.iter().enumerate() {
            if !is_first_name(word) {
                continue;
            }
            let mut parts = vec![*word];
            let mut next = i + 1;
            // A second given name (`Anna Maria Schmidt`) goes to the middle slot.
            if words.get(next).is_some_and(|w| is_first_name(w))
                && words.get(next + 1).is_some_and(|w| CAPITALIZED.is_match(w))
            {
                parts.push(words[next]);
                next += 1;
            }
            match words.get(next) {
                Some(surname) if CAPITALIZED.is_match(surname) && !NAME_FORBIDDEN.is_match(surname) => {
                    parts.push(*surname);
                    return Some(parts.join(" "));
                }
                _ => continue,
            }
        }
        None
    }
}

impl Rule for DictionaryNameRule {
    fn name(&self) -> &'static str {
        "dictionary_name"
    }

    fn apply(&self, lines: &mut [Line], record: &mut ContactRecord) {
        if record.has_name() {
            return;
        }
        for line in lines.iter_mut().filter(|l| !l.is_consumed()) {
            if let Some(name) = Self::find_name(&line.clean) {
                debug!("Found name {} by given name", name);
                record.set_name(&name);
                line.claim(LineKind::Name);
                return;
            }
        }
    }
}

/// Any line of exactly two capitalized words without digits or separators.
#[derive(Debug, Default)]
pub struct PositionalNameRule;

impl PositionalNameRule {
    fn looks_like_name(text: &str) -> bool {
        let words: Vec<&str> = text.split_whitespace().collect();
        words.len() == 2
            && words.iter().all(|w| CAPITALIZED.is_match(w))
            && !NAME_FORBIDDEN.is_match(text)
            && text.chars().count() < MAX_NAME_LEN
    }
}

impl Rule for PositionalNameRule {
    fn name(&self) -> &'static str {
        "positional_name"
    }

    fn apply(&self, lines: &mut [Line], record: &mut ContactRecord) {
        if record.has_name() {
            return;
        }
        for line in lines.iter_mut().filter(|l| !l.is_consumed()) {
            if Self::looks_like_name(&line.clean) {
                debug!("Guessing name {} from shape", line.clean);
                record.set_name(&line.clean);
                line.claim(LineKind::Name);
                return;
            }
        }
    }
}
