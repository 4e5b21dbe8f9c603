//! Property tests for identifier construction.

use proptest::prelude::*;

use assetgen::domain::services::FALLBACK_IDENTIFIER;
use assetgen::{build_identifier, NamingCase};

fn naming_case() -> impl Strategy<Value = NamingCase> {
    prop_oneof![
        Just(NamingCase::Camel),
        Just(NamingCase::Snake),
        Just(NamingCase::Keep),
    ]
}

fn relative_path() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9 ._@-]{1,12}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("/"))
}

fn prefix() -> impl Strategy<Value = String> {
    proptest::string::string_regex("([a-z][A-Za-z0-9]{0,5})?").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: identifiers never panic on arbitrary input.
    #[test]
    fn property_never_panics(path in "(?s).{0,128}", case in naming_case()) {
        let _ = build_identifier(&path, case, "");
    }

    /// PROPERTY: identifiers are non-empty Dart names made of `[A-Za-z0-9_]`
    /// that never start with a digit.
    #[test]
    fn property_identifier_is_valid_dart_name(
        path in relative_path(),
        case in naming_case(),
        prefix in prefix(),
    ) {
        let id = build_identifier(&path, case, &prefix);

        prop_assert!(!id.is_empty());
        prop_assert!(id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'), "{}", id);
        prop_assert!(!id.starts_with(|c: char| c.is_ascii_digit()), "{}", id);
    }

    /// PROPERTY: identical input gives identical output.
    #[test]
    fn property_identifier_is_deterministic(
        path in relative_path(),
        case in naming_case(),
        prefix in prefix(),
    ) {
        prop_assert_eq!(
            build_identifier(&path, case, &prefix),
            build_identifier(&path, case, &prefix)
        );
    }

    /// PROPERTY: paths without any letters or digits fall back to `_`.
    #[test]
    fn property_symbol_only_path_uses_fallback(path in "[ ._@/-]{0,16}") {
        prop_assert_eq!(build_identifier(&path, NamingCase::Camel, ""), FALLBACK_IDENTIFIER);
    }

    /// PROPERTY: a non-empty prefix always leads the identifier.
    #[test]
    fn property_prefix_leads(path in relative_path(), prefix in "[a-z][a-z0-9]{0,5}") {
        let id = build_identifier(&path, NamingCase::Camel, &prefix);
        prop_assert!(id.starts_with(&prefix), "{} / {}", id, prefix);
    }
}
