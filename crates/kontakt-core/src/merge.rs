//! Duplicate detection and merging of contacts across scans.

use tracing::debug;

use crate::extract::rules::normalize_phone;
use crate::models::contact::Typed;
use crate::models::vcard::VCardData;

/// Normalized phone numbers must be longer than this to identify a contact.
const MIN_MATCH_PHONE_LEN: usize = 6;

fn normalized_name(data: &VCardData) -> Option<String> {
    data.full_name
        .as_deref()
        .map(|n| n.trim().to_lowercase())
        .filter(|n| !n.is_empty())
}

fn normalized_phones(data: &VCardData) -> Vec<String> {
    data.tel.iter().map(|t| normalize_phone(&t.value)).collect()
}

/// Index of the first entry in `existing` that describes the same contact.
///
/// Contacts match on the same full name (trimmed, case-insensitive) or on a
/// shared normalized phone number longer than six characters.
pub fn find_duplicate(candidate: &VCardData, existing: &[VCardData]) -> Option<usize> {
    let name = normalized_name(candidate);
    let phones: Vec<String> = normalized_phones(candidate)
        .into_iter()
        .filter(|p| p.chars().count() > MIN_MATCH_PHONE_LEN)
        .collect();

    existing.iter().position(|other| {
        if name.is_some() && normalized_name(other) == name {
            return true;
        }
        if phones.is_empty() {
            return false;
        }
        let other_phones = normalized_phones(other);
        phones.iter().any(|p| other_phones.contains(p))
    })
}

fn union(newer: &[Typed<String>], older: &[Typed<String>]) -> Vec<Typed<String>> {
    let mut merged = newer.to_vec();
    for entry in older {
        if !merged.iter().any(|m| m.value == entry.value) {
            merged.push(entry.clone());
        }
    }
    merged
}

/// Merge two records of the same contact. `newer` wins on conflicts.
///
/// Empty fields of `newer` are filled from `older`; phones, emails and URLs
/// are unioned by value with `newer` entries first; addresses come from
/// `older` only when `newer` has none.
pub fn merge_contacts(newer: &VCardData, older: &VCardData) -> VCardData {
    fn fill(target: &mut Option<String>, source: &Option<String>) {
        if target.as_deref().is_none_or(|v| v.trim().is_empty()) {
            target.clone_from(source);
        }
    }

    let mut merged = newer.clone();
    fill(&mut merged.full_name, &older.full_name);
    fill(&mut merged.n, &older.n);
    fill(&mut merged.org, &older.org);
    fill(&mut merged.title, &older.title);
    fill(&mut merged.role, &older.role);
    fill(&mut merged.bday, &older.bday);
    fill(&mut merged.photo, &older.photo);
    fill(&mut merged.note, &older.note);

    merged.tel = union(&newer.tel, &older.tel);
    merged.email = union(&newer.email, &older.email);
    merged.url = union(&newer.url, &older.url);
    if merged.adr.is_empty() {
        merged.adr = older.adr.clone();
    }
    merged
}

/// Fold `cards` (oldest first) into a deduplicated list, newest first.
///
/// Each card is merged into an earlier duplicate, which then moves to the
/// front. Cards with neither a name nor a phone number are skipped.
pub fn merge_all(cards: &[VCardData]) -> Vec<VCardData> {
    let mut merged: Vec<VCardData> = Vec::new();

    for card in cards {
        if normalized_name(card).is_none() && card.tel.is_empty() {
            debug!("Skipping card without name or phone");
            continue;
        }
        let entry = match find_duplicate(card, &merged) {
            Some(index) => {
                let older = merged.remove(index);
                debug!("Merging duplicate of {:?}", older.full_name);
                merge_contacts(card, &older)
            }
            None => card.clone(),
        };
        merged.insert(0, entry);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contact::Address;
    use pretty_assertions::assert_eq;

    fn card(name: &str, phones: &[&str]) -> VCardData {
        VCardData {
            full_name: (!name.is_empty()).then(|| name.to_string()),
            tel: phones
                .iter()
                .map(|p| Typed::new("WORK", p.to_string()))
                .collect(),
            ..VCardData::default()
        }
    }

    #[test]
    fn test_duplicate_by_name() {
        let existing = vec![card("Erika Muster", &[]), card("Max Mustermann", &[])];
        assert_eq!(find_duplicate(&card("  max mustermann ", &[]), &existing), Some(1));
        assert_eq!(find_duplicate(&card("Anna Schmidt", &[]), &existing), None);
    }

    #[test]
    fn test_duplicate_by_normalized_phone() {
        let existing = vec![card("", &["+49 (0)30 / 1234567"])];
        assert_eq!(find_duplicate(&card("M. Mustermann", &["+49 30 1234567"]), &existing), Some(0));
        // Short numbers are too ambiguous to match on.
        let existing = vec![card("", &["110"])];
        assert_eq!(find_duplicate(&card("", &["110"]), &existing), None);
    }

    #[test]
    fn test_merge_contacts() {
        let mut older = card("Max Mustermann", &["030 111111", "0171 222222"]);
        older.org = Some("Musterfirma GmbH".to_string());
        older.note = Some("Messe 2024".to_string());
        older.adr = vec![Typed::new("WORK", Address { city: "Berlin".to_string(), ..Address::default() })];

        let mut newer = card("Max Mustermann", &["0171 222222", "089 333333"]);
        newer.title = Some("CEO".to_string());
        newer.note = Some("Messe 2025".to_string());

        let merged = merge_contacts(&newer, &older);
        let phones: Vec<&str> = merged.tel.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(phones, vec!["0171 222222", "089 333333", "030 111111"]);
        assert_eq!(merged.org.as_deref(), Some("Musterfirma GmbH"));
        assert_eq!(merged.title.as_deref(), Some("CEO"));
        assert_eq!(merged.note.as_deref(), Some("Messe 2025"));
        assert_eq!(merged.adr, older.adr);
    }

    #[test]
    fn test_merge_all_newest_first() {
        let cards = vec![
            card("Max Mustermann", &["030 1234567"]),
            card("Anna Schmidt", &[]),
            card("", &[]),
            card("Maximilian Mustermann", &["030/1234567"]),
        ];
        let merged = merge_all(&cards);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].full_name.as_deref(), Some("Maximilian Mustermann"));
        assert_eq!(merged[0].tel.len(), 2);
        assert_eq!(merged[1].full_name.as_deref(), Some("Anna Schmidt"));
    }
}
