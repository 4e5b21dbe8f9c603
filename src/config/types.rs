//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::RenderOptions;
use crate::domain::value_objects::{ExcludePatterns, NamingCase, OutputKind, SortOrder};
use crate::error::AssetGenResult;

use super::loader::{self, ConfigWarning};

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "assetgen.yaml";

/// Generator configuration
///
/// Constructed once per run and never mutated afterwards; use the `with_*`
/// methods to derive an adjusted copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directories scanned in order; order decides grouping and root-of-record
    pub roots: Vec<String>,

    /// Generated Dart file
    pub output: PathBuf,

    pub class_name: String,

    /// Glob patterns (`*` wildcard) tested against `root/relative`
    pub exclude: Vec<String>,

    /// Lowercase extensions with leading dot; `None` keeps every file
    pub include_extensions: Option<Vec<String>>,

    #[serde(rename = "case")]
    pub naming_case: NamingCase,

    pub sort: SortOrder,

    pub group_by_root: bool,

    pub add_header: bool,

    pub generate_map: bool,

    pub prefix: String,

    pub watch_mode: bool,

    pub generate_enum: bool,

    pub validate_pubspec: bool,

    pub build_runner_mode: bool,

    pub pubspec_path: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            roots: vec!["assets".to_string()],
            output: PathBuf::from("lib/generated/assets.dart"),
            class_name: "Assets".to_string(),
            exclude: Vec::new(),
            include_extensions: None,
            naming_case: NamingCase::Camel,
            sort: SortOrder::Identifier,
            group_by_root: true,
            add_header: true,
            generate_map: true,
            prefix: String::new(),
            watch_mode: false,
            generate_enum: false,
            validate_pubspec: true,
            build_runner_mode: false,
            pubspec_path: None,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file (defaults if the file is missing)
    pub fn load(path: &Path) -> AssetGenResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AssetGenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Parse the tolerant line-oriented form used by the build hook.
    pub fn parse_lenient(content: &str) -> Self {
        super::lenient::parse(content)
    }

    /// Normalize fields that accept loose input.
    pub fn normalized(mut self) -> Self {
        if let Some(exts) = self.include_extensions.take() {
            self.include_extensions = Some(exts.iter().map(|e| normalize_extension(e)).collect());
        }
        self
    }

    /// Compile the exclude list.
    pub fn exclude_patterns(&self) -> AssetGenResult<ExcludePatterns> {
        ExcludePatterns::new(&self.exclude)
    }

    /// True if `extension` (lowercase, with leading dot, or empty) passes the
    /// `include_extensions` filter.
    pub fn accepts_extension(&self, extension: &str) -> bool {
        match &self.include_extensions {
            Some(exts) => exts.iter().any(|e| e == extension),
            None => true,
        }
    }

    pub fn output_kind(&self) -> OutputKind {
        OutputKind::from_flag(self.generate_enum)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            class_name: self.class_name.clone(),
            kind: self.output_kind(),
            group_by_root: self.group_by_root,
            add_header: self.add_header,
            generate_map: self.generate_map,
            watch_mode: self.watch_mode,
            build_runner_mode: self.build_runner_mode,
        }
    }

    pub fn with_roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roots = roots.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_include_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.include_extensions = Some(
            extensions
                .into_iter()
                .map(|e| normalize_extension(e.as_ref()))
                .collect(),
        );
        self
    }

    pub fn with_naming_case(mut self, naming_case: NamingCase) -> Self {
        self.naming_case = naming_case;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_group_by_root(mut self, group_by_root: bool) -> Self {
        self.group_by_root = group_by_root;
        self
    }

    pub fn with_add_header(mut self, add_header: bool) -> Self {
        self.add_header = add_header;
        self
    }

    pub fn with_generate_map(mut self, generate_map: bool) -> Self {
        self.generate_map = generate_map;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_watch_mode(mut self, watch_mode: bool) -> Self {
        self.watch_mode = watch_mode;
        self
    }

    pub fn with_generate_enum(mut self, generate_enum: bool) -> Self {
        self.generate_enum = generate_enum;
        self
    }

    pub fn with_validate_pubspec(mut self, validate_pubspec: bool) -> Self {
        self.validate_pubspec = validate_pubspec;
        self
    }

    pub fn with_build_runner_mode(mut self, build_runner_mode: bool) -> Self {
        self.build_runner_mode = build_runner_mode;
        self
    }

    pub fn with_pubspec_path(mut self, pubspec_path: Option<PathBuf>) -> Self {
        self.pubspec_path = pubspec_path;
        self
    }
}

/// `"PNG"` → `".png"`; the empty string stays empty.
pub fn normalize_extension(raw: &str) -> String {
    let ext = raw.trim().to_lowercase();
    if ext.is_empty() || ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}

/// Lowercase extension of a path's file name including the leading dot, or
/// the empty string when there is none.
pub fn extension_of(path: &str) -> String {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match name.rfind('.') {
        Some(dot) if dot > 0 => name[dot..].to_lowercase(),
        _ => String::new(),
    }
}
