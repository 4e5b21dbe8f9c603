//! Asset entry entity
//!
//! One discovered, filtered asset file for the current run.

/// A discovered asset file bound to a generated identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    root: String,
    relative_path: String,
    identifier: String,
}

impl AssetEntry {
    /// Create a new entry. `root` has its backslashes and trailing slashes
    /// normalized away; `relative_path` is expected to use forward slashes.
    pub fn new(
        root: impl Into<String>,
        relative_path: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            root: normalize_root(&root.into()),
            relative_path: relative_path.into(),
            identifier: identifier.into(),
        }
    }

    /// Configured root this entry was discovered under
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Path relative to the root, forward-slash separated
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// `root/relative_path`, the string bound to the identifier in output
    pub fn full_path(&self) -> String {
        join_root(&self.root, &self.relative_path)
    }

    pub(crate) fn rename(&mut self, identifier: String) {
        self.identifier = identifier;
    }
}

/// Normalize a configured root: backslashes become forward slashes and
/// trailing separators are dropped (a bare `/` is kept).
pub fn normalize_root(root: &str) -> String {
    let normalized = root.replace('\\', "/");
    let trimmed = normalized.trim_end_matches('/');
    if trimmed.is_empty() && !normalized.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Join a normalized root and a relative path with a single `/`.
pub fn join_root(root: &str, relative: &str) -> String {
    if root.is_empty() {
        relative.to_string()
    } else if root.ends_with('/') {
        format!("{}{}", root, relative)
    } else {
        format!("{}/{}", root, relative)
    }
}
