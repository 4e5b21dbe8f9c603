//! Error types for assetgen
//!
//! Only genuine I/O failures on the output path and unreadable configuration
//! escape as errors. Everything else is routed into warning lists.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for assetgen operations
pub type AssetGenResult<T> = Result<T, AssetGenError>;

/// Main error type for assetgen operations
#[derive(Error, Debug)]
pub enum AssetGenError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Configuration file exists but cannot be understood
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Output file or its parent directory could not be written
    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File watcher could not be created or subscribed
    #[error("watch error: {0}")]
    Watch(String),

    /// Exclude pattern could not be compiled
    #[error("invalid exclude pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl From<notify::Error> for AssetGenError {
    fn from(err: notify::Error) -> Self {
        AssetGenError::Watch(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_invalid_config() {
        let err = AssetGenError::InvalidConfig {
            file: PathBuf::from("assetgen.yaml"),
            message: "expected a mapping".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration in assetgen.yaml: expected a mapping"
        );
    }

    #[test]
    fn test_error_display_output_write() {
        let err = AssetGenError::OutputWrite {
            path: PathBuf::from("lib/generated/assets.dart"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to write lib/generated/assets.dart: denied"
        );
    }
}
