//! Exclude patterns value object
//!
//! Matches `root/relative` candidate paths against the configured `exclude`
//! list. A `*` matches any run of characters (path separators included); every
//! other character is literal.

use glob::{MatchOptions, Pattern};

use crate::error::{AssetGenError, AssetGenResult};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Compiled exclude patterns.
#[derive(Debug, Clone, Default)]
pub struct ExcludePatterns {
    patterns: Vec<Pattern>,
}

impl ExcludePatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile the configured patterns.
    pub fn new<S: AsRef<str>>(raw: &[S]) -> AssetGenResult<Self> {
        let patterns = raw
            .iter()
            .map(|p| compile(p.as_ref()))
            .collect::<AssetGenResult<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// True if any pattern matches the whole candidate path.
    pub fn is_excluded(&self, candidate: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| p.matches_with(candidate, MATCH_OPTIONS))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Escape everything except `*`, and fold runs of `*` into one so `**` never
/// reaches the glob parser as a recursive wildcard.
fn compile(raw: &str) -> AssetGenResult<Pattern> {
    let mut source = String::with_capacity(raw.len());
    for (i, literal) in raw.split('*').enumerate() {
        if i > 0 && !source.ends_with('*') {
            source.push('*');
        }
        source.push_str(&Pattern::escape(literal));
    }
    Pattern::new(&source).map_err(|e| AssetGenError::InvalidPattern {
        pattern: raw.to_string(),
        message: e.to_string(),
    })
}
