//! Discovery, filtering, identification and ordering

use std::path::Path;

use crate::config::{extension_of, GeneratorConfig};
use crate::domain::entities::{join_root, normalize_root, AssetEntry};
use crate::domain::services::{build_identifier, deduplicate};
use crate::domain::value_objects::SortOrder;
use crate::error::AssetGenResult;
use crate::infrastructure::fs::list_files;

/// Discover, filter, name, deduplicate and order the entries for one run.
///
/// Roots are resolved against `project_root`. A root that is missing or
/// cannot be listed contributes nothing. Returns the ordered entries and
/// the collision warnings in discovery order.
pub fn plan_entries(
    project_root: &Path,
    config: &GeneratorConfig,
) -> AssetGenResult<(Vec<AssetEntry>, Vec<String>)> {
    let excludes = config.exclude_patterns()?;
    let mut entries = Vec::new();

    for root in &config.roots {
        let dir = project_root.join(root);
        if !dir.is_dir() {
            continue;
        }

        let normalized = normalize_root(root);
        for relative in list_files(&dir) {
            if excludes.is_excluded(&join_root(&normalized, &relative)) {
                continue;
            }
            if !config.accepts_extension(&extension_of(&relative)) {
                continue;
            }

            let identifier = build_identifier(&relative, config.naming_case, &config.prefix);
            entries.push(AssetEntry::new(normalized.as_str(), relative, identifier));
        }
    }

    let warnings = deduplicate(&mut entries);

    match config.sort {
        SortOrder::Path => entries.sort_by(|a, b| a.relative_path().cmp(b.relative_path())),
        SortOrder::Identifier => entries.sort_by(|a, b| a.identifier().cmp(b.identifier())),
    }

    Ok((entries, warnings))
}
