//! Generate Use Case
//!
//! One full pass of the generation pipeline:
//! 1. Discover files under every configured root
//! 2. Filter by exclude patterns and extensions
//! 3. Build and deduplicate identifiers
//! 4. Order entries
//! 5. Optionally validate against the manifest
//! 6. Render and persist only when the content changed

mod discovery;
mod result;
mod use_case;


pub use discovery::plan_entries;
pub use result::GenerationResult;
pub use use_case::{GenerateOptions, GenerateUseCase};
