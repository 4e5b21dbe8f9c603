//! assetgen - asset constant generator for Flutter projects
//!
//! Scans configured asset directories, derives a stable identifier for every
//! file and writes a Dart source file exposing them as constants (class or
//! enum), optionally cross-checked against `pubspec.yaml`. A watch mode keeps
//! the output current and a build hook serves host build systems.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    AssetWatcher, BuildHook, GenerateOptions, GenerateUseCase, GenerationResult, WatchEvent,
};
pub use config::{ConfigWarning, GeneratorConfig, DEFAULT_CONFIG_FILE};
pub use domain::entities::AssetEntry;
pub use domain::services::build_identifier;
pub use domain::value_objects::{ContentHash, NamingCase, OutputKind, SortOrder};
pub use error::{AssetGenError, AssetGenResult};
