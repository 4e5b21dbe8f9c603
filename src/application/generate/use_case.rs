//! Generate use case implementation

use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::domain::ports::{ManifestChecker, OutputWriter};
use crate::domain::services::render;
use crate::domain::value_objects::ContentHash;
use crate::error::AssetGenResult;
use crate::infrastructure::{LocalOutputWriter, PubspecManifest};

use super::discovery::plan_entries;
use super::result::GenerationResult;

/// Per-invocation switches that are not part of the configuration record
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Render and compare, but never touch the filesystem
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn dry_run() -> Self {
        Self { dry_run: true }
    }
}

/// Generate use case, parameterized by its ports.
pub struct GenerateUseCase<M, W>
where
    M: ManifestChecker,
    W: OutputWriter,
{
    project_root: PathBuf,
    manifest: M,
    writer: W,
}

impl GenerateUseCase<PubspecManifest, LocalOutputWriter> {
    /// Use case backed by the local filesystem and `pubspec.yaml`.
    pub fn local(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        Self::new(
            project_root.clone(),
            PubspecManifest::new(project_root),
            LocalOutputWriter::new(),
        )
    }
}

impl<M, W> GenerateUseCase<M, W>
where
    M: ManifestChecker,
    W: OutputWriter,
{
    pub fn new(project_root: impl Into<PathBuf>, manifest: M, writer: W) -> Self {
        Self {
            project_root: project_root.into(),
            manifest,
            writer,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn manifest(&self) -> &M {
        &self.manifest
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Output path resolved against the project root.
    pub fn output_path(&self, config: &GeneratorConfig) -> PathBuf {
        if config.output.is_absolute() {
            config.output.clone()
        } else {
            self.project_root.join(&config.output)
        }
    }

    /// Run one full generation pass.
    ///
    /// Only failure to prepare or write the output escapes as an error.
    pub fn generate(
        &self,
        config: &GeneratorConfig,
        options: &GenerateOptions,
    ) -> AssetGenResult<GenerationResult> {
        let (entries, warnings) = plan_entries(&self.project_root, config)?;

        let validation = if config.validate_pubspec {
            let paths: Vec<String> = entries.iter().map(|e| e.full_path()).collect();
            Some(
                self.manifest
                    .validate(&paths, &config.roots, config.pubspec_path.as_deref()),
            )
        } else {
            None
        };

        let content = render(&entries, &config.render_options());

        let output = self.output_path(config);
        if !options.dry_run {
            self.writer.prepare(&output)?;
        }

        let previous = self.writer.existing(&output)?.unwrap_or_default();
        let skipped = ContentHash::of(&content).matches(&previous);

        if !options.dry_run && !skipped {
            self.writer.write(&output, &content)?;
        }

        Ok(GenerationResult {
            count: entries.len(),
            skipped,
            warnings,
            validation,
            output,
            content,
            previous,
        })
    }
}
