//! Manifest checker implementations

mod pubspec;

pub use pubspec::{PubspecManifest, DEFAULT_PUBSPEC};
