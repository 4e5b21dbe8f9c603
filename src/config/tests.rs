//! Tests for the config module

use super::types::*;
use crate::domain::value_objects::{NamingCase, OutputKind, SortOrder};
use crate::error::AssetGenError;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = GeneratorConfig::default();

    assert_eq!(config.roots, vec!["assets"]);
    assert_eq!(config.output, PathBuf::from("lib/generated/assets.dart"));
    assert_eq!(config.class_name, "Assets");
    assert!(config.exclude.is_empty());
    assert_eq!(config.include_extensions, None);
    assert_eq!(config.naming_case, NamingCase::Camel);
    assert_eq!(config.sort, SortOrder::Identifier);
    assert!(config.group_by_root);
    assert!(config.add_header);
    assert!(config.generate_map);
    assert_eq!(config.prefix, "");
    assert!(!config.watch_mode);
    assert!(!config.generate_enum);
    assert!(config.validate_pubspec);
    assert!(!config.build_runner_mode);
    assert_eq!(config.pubspec_path, None);
}

#[test]
fn test_config_parse_yaml() {
    let yaml = r#"
roots:
  - assets/images
  - assets/icons
output: lib/r.dart
class_name: R
exclude: ["*.tmp"]
include_extensions: [PNG, svg]
case: snake
sort: path
group_by_root: false
prefix: img
generate_enum: true
pubspec_path: app/pubspec.yaml
"#;

    let config: GeneratorConfig = serde_yaml_ng::from_str(yaml).unwrap();
    let config = config.normalized();

    assert_eq!(config.roots, vec!["assets/images", "assets/icons"]);
    assert_eq!(config.output, PathBuf::from("lib/r.dart"));
    assert_eq!(config.class_name, "R");
    assert_eq!(config.exclude, vec!["*.tmp"]);
    assert_eq!(
        config.include_extensions,
        Some(vec![".png".to_string(), ".svg".to_string()])
    );
    assert_eq!(config.naming_case, NamingCase::Snake);
    assert_eq!(config.sort, SortOrder::Path);
    assert!(!config.group_by_root);
    assert_eq!(config.prefix, "img");
    assert_eq!(config.output_kind(), OutputKind::Enum);
    assert_eq!(config.pubspec_path, Some(PathBuf::from("app/pubspec.yaml")));
    // untouched keys keep defaults
    assert!(config.add_header);
    assert!(config.validate_pubspec);
}

#[test]
fn test_unknown_case_value_falls_back() {
    let config: GeneratorConfig = serde_yaml_ng::from_str("case: kebab\nsort: mtime\n").unwrap();
    assert_eq!(config.naming_case, NamingCase::Camel);
    assert_eq!(config.sort, SortOrder::Identifier);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let (config, warnings) =
        GeneratorConfig::load_with_warnings(&dir.path().join("assetgen.yaml")).unwrap();
    assert_eq!(config, GeneratorConfig::default());
    assert!(warnings.is_empty());
}

#[test]
fn test_empty_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assetgen.yaml");
    fs::write(&path, "\n# nothing here\n").unwrap();
    assert_eq!(GeneratorConfig::load(&path).unwrap(), GeneratorConfig::default());
}

#[test]
fn test_unknown_keys_become_warnings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assetgen.yaml");
    fs::write(&path, "roots: [assets]\nclass_nam: R\n").unwrap();

    let (config, warnings) = GeneratorConfig::load_with_warnings(&path).unwrap();

    assert_eq!(config.class_name, "Assets");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "class_nam");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("class_name"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assetgen.yaml");
    fs::write(&path, "roots: [unclosed\n").unwrap();

    let result = GeneratorConfig::load(&path);
    assert!(matches!(result, Err(AssetGenError::InvalidConfig { .. })));
}

#[test]
fn test_with_overrides_leave_original_untouched() {
    let base = GeneratorConfig::default();
    let watch = base.clone().with_watch_mode(true).with_validate_pubspec(false);

    assert!(!base.watch_mode);
    assert!(base.validate_pubspec);
    assert!(watch.watch_mode);
    assert!(!watch.validate_pubspec);
    assert!(watch.render_options().watch_mode);
}

#[test]
fn test_accepts_extension() {
    let config = GeneratorConfig::default().with_include_extensions([".PNG", "svg"]);
    assert!(config.accepts_extension(".png"));
    assert!(config.accepts_extension(".svg"));
    assert!(!config.accepts_extension(".jpg"));
    assert!(!config.accepts_extension(""));

    let with_empty = GeneratorConfig::default().with_include_extensions(["png", ""]);
    assert!(with_empty.accepts_extension(""));

    assert!(GeneratorConfig::default().accepts_extension(".anything"));
}

#[test]
fn test_extension_of() {
    assert_eq!(extension_of("assets/logo.PNG"), ".png");
    assert_eq!(extension_of("assets/archive.tar.gz"), ".gz");
    assert_eq!(extension_of("assets/LICENSE"), "");
    assert_eq!(extension_of("assets/.hidden"), "");
    assert_eq!(extension_of("assets/.hidden.tmp"), ".tmp");
}
