//! Watch event types

use serde::Serialize;

use crate::application::generate::GenerationResult;
use crate::domain::ports::ManifestValidation;

/// Watch event types, also used for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Subscriptions are active for these roots
    WatchStarted { roots: Vec<String> },
    /// Configured root does not exist and is not watched
    RootSkipped { root: String },
    /// A change passed the filter and (re)armed the debounce timer
    FileChanged { path: String },
    GenerationStarted,
    GenerationComplete {
        count: usize,
        skipped: bool,
        warnings: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        validation: Option<ManifestValidation>,
        output: String,
    },
    /// Generation or watcher failure; watching continues
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    pub fn completed(result: &GenerationResult) -> Self {
        WatchEvent::GenerationComplete {
            count: result.count,
            skipped: result.skipped,
            warnings: result.warnings.clone(),
            validation: result.validation.clone(),
            output: result.output.display().to_string(),
        }
    }

    pub fn error(message: impl std::fmt::Display) -> Self {
        WatchEvent::Error {
            message: message.to_string(),
        }
    }

    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
