//! Generation result

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::ports::ManifestValidation;

/// Outcome of one generation pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationResult {
    /// Entries in the final set
    pub count: usize,
    /// Rendered content matched the file on disk; nothing was written
    pub skipped: bool,
    /// Collision notices, in discovery order
    pub warnings: Vec<String>,
    pub validation: Option<ManifestValidation>,
    /// Resolved output path
    pub output: PathBuf,
    /// Rendered text
    #[serde(skip)]
    pub content: String,
    /// On-disk text before this pass (empty if the file did not exist)
    #[serde(skip)]
    pub previous: String,
}

impl GenerationResult {
    /// True if the pass left the output file's bytes different from before
    /// (or would have, in a dry run).
    pub fn has_changes(&self) -> bool {
        !self.skipped
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
            || self
                .validation
                .as_ref()
                .is_some_and(|v| !v.warnings.is_empty())
    }

    /// False when a manifest check ran and found undeclared assets.
    pub fn is_valid(&self) -> bool {
        self.validation.as_ref().map_or(true, |v| v.is_valid)
    }
}
