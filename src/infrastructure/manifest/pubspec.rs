//! `pubspec.yaml` manifest checker
//!
//! Declared assets come from the `flutter.assets` list. Entries ending in `/`
//! stand for every file found under that directory at validation time; all
//! other entries are taken literally.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde_yaml_ng::Value;

use crate::domain::entities::normalize_root;
use crate::domain::ports::{ManifestChecker, ManifestValidation};
use crate::infrastructure::fs::list_files;

/// Default manifest file name, resolved against the project root.
pub const DEFAULT_PUBSPEC: &str = "pubspec.yaml";

/// Manifest checker backed by a Flutter `pubspec.yaml`.
#[derive(Debug, Clone)]
pub struct PubspecManifest {
    project_root: PathBuf,
}

impl PubspecManifest {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    fn resolve(&self, manifest_path: Option<&Path>) -> PathBuf {
        let path = manifest_path.unwrap_or(Path::new(DEFAULT_PUBSPEC));
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }

    /// Declared assets with directory entries expanded, in declaration order.
    fn declared_assets(&self, base: &Path, entries: &[String], warnings: &mut Vec<String>) -> Vec<String> {
        let mut declared = Vec::new();
        let mut seen = HashSet::new();

        for entry in entries {
            if entry.ends_with('/') {
                let dir = base.join(entry);
                if !dir.is_dir() {
                    warnings.push(format!("declared asset directory '{}' does not exist", entry));
                    continue;
                }
                for file in list_files(&dir) {
                    let path = format!("{}{}", entry, file);
                    if seen.insert(path.clone()) {
                        declared.push(path);
                    }
                }
            } else if seen.insert(entry.clone()) {
                declared.push(entry.clone());
            }
        }

        declared
    }
}

impl ManifestChecker for PubspecManifest {
    fn validate(
        &self,
        asset_paths: &[String],
        roots: &[String],
        manifest_path: Option<&Path>,
    ) -> ManifestValidation {
        let path = self.resolve(manifest_path);
        let display = path.display().to_string();

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return ManifestValidation::unavailable(format!("{} not found", display));
            }
            Err(e) => {
                return ManifestValidation::unavailable(format!("failed to read {}: {}", display, e));
            }
        };

        let document: Value = match serde_yaml_ng::from_str(&content) {
            Ok(doc) => doc,
            Err(e) => {
                return ManifestValidation::unavailable(format!("failed to parse {}: {}", display, e));
            }
        };

        let mut warnings = Vec::new();
        let entries = match asset_entries(&document) {
            Some(entries) => entries,
            None => {
                warnings.push(format!("{} has no flutter.assets section", display));
                Vec::new()
            }
        };

        let base = path.parent().unwrap_or(Path::new("."));
        let declared = self.declared_assets(base, &entries, &mut warnings);
        let declared_set: HashSet<&str> = declared.iter().map(String::as_str).collect();
        let found_set: HashSet<&str> = asset_paths.iter().map(String::as_str).collect();

        let missing_assets: Vec<String> = asset_paths
            .iter()
            .filter(|p| !declared_set.contains(p.as_str()))
            .cloned()
            .collect();

        let roots: Vec<String> = roots.iter().map(|r| normalize_root(r)).collect();
        let unused_assets: Vec<String> = declared
            .iter()
            .filter(|p| !found_set.contains(p.as_str()))
            .filter(|p| is_under_any_root(p, &roots))
            .cloned()
            .collect();

        if !missing_assets.is_empty() {
            warnings.push(format!(
                "{} asset(s) found on disk but not declared in {}",
                missing_assets.len(),
                display
            ));
        }
        if !unused_assets.is_empty() {
            warnings.push(format!(
                "{} declared asset(s) not found on disk",
                unused_assets.len()
            ));
        }

        ManifestValidation {
            is_valid: missing_assets.is_empty(),
            missing_assets,
            unused_assets,
            warnings,
        }
    }
}

/// Read `flutter.assets` entries. Newer pubspecs allow `{path: ...}` maps.
fn asset_entries(document: &Value) -> Option<Vec<String>> {
    let assets = document.get("flutter")?.get("assets")?.as_sequence()?;
    Some(
        assets
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Mapping(_) => item.get("path").and_then(Value::as_str).map(str::to_string),
                _ => None,
            })
            .collect(),
    )
}

fn is_under_any_root(path: &str, roots: &[String]) -> bool {
    roots.is_empty()
        || roots
            .iter()
            .any(|root| path.strip_prefix(root.as_str()).is_some_and(|rest| rest.starts_with('/')))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn undeclared_asset_is_missing() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("pubspec.yaml"),
            "name: app\nflutter:\n  assets:\n    - assets/a.png\n",
        )
        .unwrap();

        let checker = PubspecManifest::new(dir.path());
        let result = checker.validate(
            &paths(&["assets/a.png", "assets/b.png"]),
            &paths(&["assets"]),
            None,
        );

        assert!(!result.is_valid);
        assert_eq!(result.missing_assets, paths(&["assets/b.png"]));
        assert!(result.unused_assets.is_empty());
    }

    #[test]
    fn directory_entry_expands_to_files() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("assets/icons")).unwrap();
        fs::write(dir.path().join("assets/a.png"), "").unwrap();
        fs::write(dir.path().join("assets/icons/b.svg"), "").unwrap();
        fs::write(
            dir.path().join("pubspec.yaml"),
            "flutter:\n  assets:\n    - assets/\n",
        )
        .unwrap();

        let result = PubspecManifest::new(dir.path()).validate(
            &paths(&["assets/a.png", "assets/icons/b.svg"]),
            &paths(&["assets"]),
            None,
        );

        assert!(result.is_valid);
        assert!(result.missing_assets.is_empty());
        assert!(result.unused_assets.is_empty());
    }

    #[test]
    fn declared_but_absent_asset_is_unused_but_still_valid() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("pubspec.yaml"),
            "flutter:\n  assets:\n    - assets/a.png\n    - assets/gone.png\n    - other/x.png\n",
        )
        .unwrap();

        let result = PubspecManifest::new(dir.path()).validate(
            &paths(&["assets/a.png"]),
            &paths(&["assets"]),
            None,
        );

        assert!(result.is_valid);
        assert_eq!(result.unused_assets, paths(&["assets/gone.png"]));
    }

    #[test]
    fn missing_manifest_is_invalid_with_warning() {
        let dir = tempdir().unwrap();
        let result = PubspecManifest::new(dir.path()).validate(
            &paths(&["assets/a.png"]),
            &paths(&["assets"]),
            None,
        );

        assert!(!result.is_valid);
        assert!(result.missing_assets.is_empty());
        assert!(result.unused_assets.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("not found"));
    }

    #[test]
    fn malformed_manifest_becomes_warning() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pubspec.yaml"), "flutter: [unclosed\n").unwrap();

        let result = PubspecManifest::new(dir.path()).validate(&[], &[], None);
        assert!(!result.is_valid);
        assert!(result.warnings[0].contains("failed to parse"));
    }

    #[test]
    fn override_path_is_resolved_against_project_root() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("app")).unwrap();
        fs::write(
            dir.path().join("app/pubspec.yaml"),
            "flutter:\n  assets:\n    - assets/a.png\n",
        )
        .unwrap();

        let result = PubspecManifest::new(dir.path()).validate(
            &paths(&["assets/a.png"]),
            &paths(&["assets"]),
            Some(Path::new("app/pubspec.yaml")),
        );
        assert!(result.is_valid);
    }

    #[test]
    fn mapping_entries_use_path_key() {
        let doc: Value =
            serde_yaml_ng::from_str("flutter:\n  assets:\n    - path: assets/a.png\n      flavors: [dev]\n")
                .unwrap();
        assert_eq!(asset_entries(&doc), Some(paths(&["assets/a.png"])));
    }
}
