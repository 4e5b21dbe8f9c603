//! Naming, ordering and output-shape choices
//!
//! Each of these is read leniently from configuration: unknown strings fall back
//! to the default variant instead of failing the run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Casing applied when turning path segments into an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NamingCase {
    /// `iconsPlayButton`
    #[default]
    Camel,
    /// `icons_play_button`
    Snake,
    /// `icons_play_button` with original casing preserved
    Keep,
}

impl NamingCase {
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingCase::Camel => "camel",
            NamingCase::Snake => "snake",
            NamingCase::Keep => "keep",
        }
    }
}

impl From<&str> for NamingCase {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "snake" => NamingCase::Snake,
            "keep" => NamingCase::Keep,
            _ => NamingCase::Camel,
        }
    }
}

impl From<String> for NamingCase {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<NamingCase> for String {
    fn from(value: NamingCase) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for NamingCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final ordering of generated entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortOrder {
    /// Lexicographic by final identifier
    #[default]
    Identifier,
    /// Lexicographic by path relative to its root
    Path,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Identifier => "identifier",
            SortOrder::Path => "path",
        }
    }
}

impl From<&str> for SortOrder {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "path" => SortOrder::Path,
            _ => SortOrder::Identifier,
        }
    }
}

impl From<String> for SortOrder {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<SortOrder> for String {
    fn from(value: SortOrder) -> Self {
        value.as_str().to_string()
    }
}

/// Shape of the generated Dart source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Non-instantiable class holding `static const String` bindings
    Class,
    /// Enhanced enum whose cases carry their path
    Enum,
}

impl OutputKind {
    pub fn from_flag(generate_enum: bool) -> Self {
        if generate_enum {
            OutputKind::Enum
        } else {
            OutputKind::Class
        }
    }
}
