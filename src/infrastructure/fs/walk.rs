//! Deterministic recursive file listing

use std::path::Path;

use ignore::WalkBuilder;

/// List every regular file under `dir`, as forward-slash paths relative to it.
///
/// Hidden files are included and no ignore files are honored. Entries come
/// back sorted by file name within each directory so repeated runs see the
/// same order. Unreadable entries are skipped.
pub fn list_files(dir: &Path) -> Vec<String> {
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    walker
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(dir)
                .ok()
                .map(to_forward_slashes)
        })
        .filter(|rel| !rel.is_empty() && !rel.ends_with('/'))
        .collect()
}

/// Render a relative path with `/` separators regardless of platform.
pub fn to_forward_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
