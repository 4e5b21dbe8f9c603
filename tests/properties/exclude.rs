//! Property tests for exclude pattern matching.

use proptest::prelude::*;

use assetgen::domain::value_objects::ExcludePatterns;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: compiling arbitrary patterns never panics.
    #[test]
    fn property_compile_never_panics(raw in "(?s).{0,64}") {
        let _ = ExcludePatterns::new(&[raw]);
    }

    /// PROPERTY: a pattern without `*` matches exactly its own text, even
    /// when it contains glob metacharacters.
    #[test]
    fn property_literal_pattern_matches_itself(
        raw in "[A-Za-z0-9/._?\\[\\]!-]{1,32}",
        other in "[A-Za-z0-9/._-]{1,32}",
    ) {
        let patterns = ExcludePatterns::new(&[raw.as_str()]).unwrap();
        prop_assert!(patterns.is_excluded(&raw));
        prop_assert_eq!(patterns.is_excluded(&other), other == raw);
    }

    /// PROPERTY: `*` spans directory separators.
    #[test]
    fn property_star_spans_directories(
        dirs in proptest::collection::vec("[a-z]{1,6}", 0..4),
        name in "[a-z]{1,8}",
    ) {
        let patterns = ExcludePatterns::new(&["assets/*.tmp"]).unwrap();
        let mut path = String::from("assets/");
        for dir in &dirs {
            path.push_str(dir);
            path.push('/');
        }
        path.push_str(&name);

        let tmp = format!("{}.tmp", path);
        prop_assert!(patterns.is_excluded(&tmp));
        let png = format!("{}.png", path);
        prop_assert!(!patterns.is_excluded(&png));
    }
}
