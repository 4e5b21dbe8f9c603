//! Identifier collision resolution
//!
//! Entries are processed in discovery order. The first occurrence of a name
//! keeps it; later ones get a numeric suffix starting at 2.

use std::collections::HashMap;

use crate::domain::entities::AssetEntry;

/// Tracks identifiers already handed out during one run.
#[derive(Debug, Default)]
pub struct IdentifierRegistry {
    counts: HashMap<String, usize>,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `identifier`, returning the name to use. `None` means the
    /// identifier was free and is kept as-is.
    pub fn claim(&mut self, identifier: &str) -> Option<String> {
        let Some(count) = self.counts.get(identifier).copied() else {
            self.counts.insert(identifier.to_string(), 1);
            return None;
        };

        let mut n = count + 1;
        let mut candidate = format!("{}{}", identifier, n);
        while self.counts.contains_key(&candidate) {
            n += 1;
            candidate = format!("{}{}", identifier, n);
        }

        self.counts.insert(identifier.to_string(), count + 1);
        self.counts.insert(candidate.clone(), 1);
        Some(candidate)
    }
}

/// Make every identifier unique, returning one warning per rename.
pub fn deduplicate(entries: &mut [AssetEntry]) -> Vec<String> {
    let mut registry = IdentifierRegistry::new();
    let mut warnings = Vec::new();

    for entry in entries.iter_mut() {
        if let Some(renamed) = registry.claim(entry.identifier()) {
            warnings.push(format!(
                "Duplicate identifier \"{}\" for {}; renamed to \"{}\"",
                entry.identifier(),
                entry.full_path(),
                renamed
            ));
            entry.rename(renamed);
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, identifier: &str) -> AssetEntry {
        AssetEntry::new("assets", path, identifier)
    }

    #[test]
    fn second_occurrence_gets_suffix_two() {
        let mut entries = vec![entry("logo.png", "logo"), entry("logo.svg", "logo")];
        let warnings = deduplicate(&mut entries);

        assert_eq!(entries[0].identifier(), "logo");
        assert_eq!(entries[1].identifier(), "logo2");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("\"logo\""));
        assert!(warnings[0].contains("\"logo2\""));
        assert!(warnings[0].contains("assets/logo.svg"));
    }

    #[test]
    fn third_occurrence_gets_suffix_three() {
        let mut entries = vec![
            entry("a/logo.png", "logo"),
            entry("b/logo.png", "logo"),
            entry("c/logo.png", "logo"),
        ];
        let warnings = deduplicate(&mut entries);

        let ids: Vec<_> = entries.iter().map(|e| e.identifier()).collect();
        assert_eq!(ids, vec!["logo", "logo2", "logo3"]);
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn suffix_skips_names_already_taken() {
        let mut entries = vec![
            entry("logo2.png", "logo2"),
            entry("a/logo.png", "logo"),
            entry("b/logo.png", "logo"),
        ];
        deduplicate(&mut entries);

        let ids: Vec<_> = entries.iter().map(|e| e.identifier()).collect();
        assert_eq!(ids, vec!["logo2", "logo", "logo3"]);
    }

    #[test]
    fn disambiguated_name_is_reserved_for_later_entries() {
        let mut entries = vec![
            entry("a/logo.png", "logo"),
            entry("b/logo.png", "logo"),
            entry("logo2.png", "logo2"),
        ];
        let warnings = deduplicate(&mut entries);

        let ids: Vec<_> = entries.iter().map(|e| e.identifier()).collect();
        assert_eq!(ids, vec!["logo", "logo2", "logo22"]);
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn unique_identifiers_produce_no_warnings() {
        let mut entries = vec![entry("a.png", "aPng"), entry("b.png", "bPng")];
        assert!(deduplicate(&mut entries).is_empty());
    }
}
