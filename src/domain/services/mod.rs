//! Domain Services
//!
//! Pure business logic operating on asset entries. No I/O.

mod dedupe;
mod identifier;
mod renderer;

pub use dedupe::{deduplicate, IdentifierRegistry};
pub use identifier::{build_identifier, FALLBACK_IDENTIFIER};
pub use renderer::{
    escape_dart, render, RenderOptions, HEADER_BANNER, HEADER_BUILD_RUNNER, HEADER_USAGE,
    HEADER_USAGE_WATCH,
};
