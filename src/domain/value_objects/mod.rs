//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod exclude_patterns;
mod hash;
mod naming;

pub use exclude_patterns::ExcludePatterns;
pub use hash::ContentHash;
pub use naming::{NamingCase, OutputKind, SortOrder};
