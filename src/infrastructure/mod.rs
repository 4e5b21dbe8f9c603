//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports:
//! - `fs::LocalOutputWriter` - atomic writes to the local disk
//! - `manifest::PubspecManifest` - manifest checks against `pubspec.yaml`

pub mod fs;
pub mod manifest;

pub use fs::LocalOutputWriter;
pub use manifest::PubspecManifest;
