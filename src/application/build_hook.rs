//! Reactive build hook
//!
//! Entry point for host build systems. The host detects the sentinel config
//! file, hands over its text, and supplies the writer that receives the
//! rendered source. Discovery runs for real; idempotence and collision
//! reporting are left to the CLI pipeline.

use std::path::{Path, PathBuf};

use crate::config::{GeneratorConfig, DEFAULT_CONFIG_FILE};
use crate::domain::ports::OutputWriter;
use crate::domain::services::render;
use crate::error::AssetGenResult;

use super::generate::plan_entries;

/// Rendered output destined for the host writer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutput {
    pub path: PathBuf,
    pub content: String,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct BuildHook {
    project_root: PathBuf,
}

impl BuildHook {
    /// File whose presence triggers the hook
    pub const SENTINEL: &'static str = DEFAULT_CONFIG_FILE;

    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// True if `path` names the sentinel configuration file.
    pub fn is_trigger(path: &Path) -> bool {
        path.file_name().is_some_and(|name| name == Self::SENTINEL)
    }

    /// Parse `config_text` leniently and render the output in build-runner mode.
    pub fn render(&self, config_text: &str) -> AssetGenResult<BuildOutput> {
        let config = GeneratorConfig::parse_lenient(config_text).with_build_runner_mode(true);
        let (entries, _warnings) = plan_entries(&self.project_root, &config)?;

        let path = if config.output.is_absolute() {
            config.output.clone()
        } else {
            self.project_root.join(&config.output)
        };

        Ok(BuildOutput {
            path,
            content: render(&entries, &config.render_options()),
            count: entries.len(),
        })
    }

    /// Render and hand the text to the host's `writer`.
    pub fn run<W: OutputWriter>(&self, config_text: &str, writer: &W) -> AssetGenResult<BuildOutput> {
        let output = self.render(config_text)?;
        writer.write(&output.path, &output.content)?;
        Ok(output)
    }
}
