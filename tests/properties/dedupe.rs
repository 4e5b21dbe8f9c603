//! Property tests for collision resolution.

use std::collections::HashSet;

use proptest::prelude::*;

use assetgen::domain::services::deduplicate;
use assetgen::AssetEntry;

fn identifiers() -> impl Strategy<Value = Vec<String>> {
    // Small alphabet so collisions, including ones with numeric suffixes, are common.
    proptest::collection::vec("[ab][2-3]?", 0..24)
}

fn entries(ids: &[String]) -> Vec<AssetEntry> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| AssetEntry::new("assets", format!("f{}.png", i), id.clone()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after deduplication every identifier is unique.
    #[test]
    fn property_identifiers_unique(ids in identifiers()) {
        let mut entries = entries(&ids);
        deduplicate(&mut entries);

        let unique: HashSet<&str> = entries.iter().map(|e| e.identifier()).collect();
        prop_assert_eq!(unique.len(), entries.len());
    }

    /// PROPERTY: the first occurrence keeps its name and each rename
    /// produces exactly one warning.
    #[test]
    fn property_first_occurrence_wins(ids in identifiers()) {
        let mut entries = entries(&ids);
        let warnings = deduplicate(&mut entries);

        let renamed = entries
            .iter()
            .zip(&ids)
            .filter(|(entry, original)| entry.identifier() != original.as_str())
            .count();
        prop_assert_eq!(renamed, warnings.len());

        if let (Some(first), Some(original)) = (entries.first(), ids.first()) {
            prop_assert_eq!(first.identifier(), original.as_str());
        }
    }

    /// PROPERTY: the same input always resolves to the same names.
    #[test]
    fn property_dedupe_is_deterministic(ids in identifiers()) {
        let mut a = entries(&ids);
        let mut b = entries(&ids);
        deduplicate(&mut a);
        deduplicate(&mut b);
        prop_assert_eq!(a, b);
    }
}
