//! ManifestChecker port - compares discovered assets with declared ones
//!
//! The manifest is the separately maintained asset list (for Flutter, the
//! `flutter.assets` section of `pubspec.yaml`).

use std::path::Path;

use serde::Serialize;

/// Outcome of a manifest check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ManifestValidation {
    /// True iff `missing_assets` is empty and the manifest could be read
    pub is_valid: bool,
    /// Discovered on disk but not declared in the manifest
    pub missing_assets: Vec<String>,
    /// Declared in the manifest but not found among discovered assets
    pub unused_assets: Vec<String>,
    pub warnings: Vec<String>,
}

impl ManifestValidation {
    /// Result for a manifest that could not be used at all.
    pub fn unavailable(warning: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            missing_assets: Vec::new(),
            unused_assets: Vec::new(),
            warnings: vec![warning.into()],
        }
    }
}

/// Abstract manifest checker
///
/// Never fails: an absent or malformed manifest becomes an invalid result
/// carrying a warning.
pub trait ManifestChecker {
    /// Check `asset_paths` (`root/relative` strings) against the manifest.
    fn validate(
        &self,
        asset_paths: &[String],
        roots: &[String],
        manifest_path: Option<&Path>,
    ) -> ManifestValidation;
}
