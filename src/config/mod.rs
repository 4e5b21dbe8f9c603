//! Configuration module for assetgen
//!
//! Configuration comes from a YAML file (`assetgen.yaml` by default):
//! 1. CLI flags (`--watch`, `--no-validate`) override individual fields
//! 2. Config file values
//! 3. Built-in defaults (a missing file means all defaults)
//!
//! The build hook uses the tolerant line parser in `lenient` instead of YAML.

mod lenient;
mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{ConfigWarning, KNOWN_KEYS};
pub use types::{extension_of, normalize_extension, GeneratorConfig, DEFAULT_CONFIG_FILE};
