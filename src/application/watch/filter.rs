//! Noise filter for raw filesystem events

use std::path::{Path, PathBuf};

use crate::config::{extension_of, GeneratorConfig};
use crate::domain::value_objects::ExcludePatterns;
use crate::error::AssetGenResult;
use crate::infrastructure::fs::to_forward_slashes;

/// Editor and temp-file suffixes that never trigger regeneration
const NOISE_SUFFIXES: &[&str] = &[".tmp", ".swp", "~"];

/// Decides whether a changed path should schedule a regeneration.
#[derive(Debug, Clone)]
pub struct EventFilter {
    working_dirs: Vec<PathBuf>,
    outputs: Vec<PathBuf>,
    include_extensions: Option<Vec<String>>,
    excludes: ExcludePatterns,
}

impl EventFilter {
    /// Build a filter for `config`, relativizing paths against `working_dir`.
    /// `output` is the resolved output path.
    pub fn new(config: &GeneratorConfig, working_dir: &Path, output: &Path) -> AssetGenResult<Self> {
        Ok(Self {
            working_dirs: with_canonical(working_dir),
            outputs: with_canonical(output),
            include_extensions: config.include_extensions.clone(),
            excludes: config.exclude_patterns()?,
        })
    }

    pub fn accepts(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
            return false;
        };

        if name.starts_with('.') || NOISE_SUFFIXES.iter().any(|s| name.ends_with(s)) {
            return false;
        }

        if self.is_output(path) {
            return false;
        }

        if let Some(exts) = &self.include_extensions {
            let ext = extension_of(&name);
            if !exts.iter().any(|e| *e == ext) {
                return false;
            }
        }

        !self.excludes.is_excluded(&self.relativize(path))
    }

    fn is_output(&self, path: &Path) -> bool {
        self.outputs.iter().any(|o| o == path)
            || self
                .outputs
                .iter()
                .any(|o| self.relativize(o) == self.relativize(path))
    }

    /// Forward-slash path relative to the working directory, or the whole
    /// path when it lies outside it.
    fn relativize(&self, path: &Path) -> String {
        self.working_dirs
            .iter()
            .find_map(|dir| path.strip_prefix(dir).ok())
            .map(to_forward_slashes)
            .unwrap_or_else(|| to_forward_slashes(path))
    }
}

/// The path itself plus its canonical form, when that differs.
fn with_canonical(path: &Path) -> Vec<PathBuf> {
    let mut paths = vec![path.to_path_buf()];
    let canonical = path.canonicalize().ok().or_else(|| {
        let parent = path.parent()?.canonicalize().ok()?;
        Some(parent.join(path.file_name()?))
    });
    if let Some(canonical) = canonical {
        if canonical != path {
            paths.push(canonical);
        }
    }
    paths
}
