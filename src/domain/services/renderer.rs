//! Dart source renderer
//!
//! Renders the final, sorted entry list into the generated file. Output shape
//! is chosen once via [`OutputKind`]; same entries and options always give
//! byte-identical text.

use crate::domain::entities::AssetEntry;
use crate::domain::value_objects::OutputKind;

pub const HEADER_BANNER: &str = "// GENERATED CODE - DO NOT MODIFY BY HAND";
pub const HEADER_USAGE: &str = "// Regenerate with `assetgen`.";
pub const HEADER_USAGE_WATCH: &str = "// Kept up to date by `assetgen --watch`.";
pub const HEADER_BUILD_RUNNER: &str = "// Generated by build_runner via the assetgen builder.";

/// Everything the renderer needs to know about the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub class_name: String,
    pub kind: OutputKind,
    pub group_by_root: bool,
    pub add_header: bool,
    pub generate_map: bool,
    pub watch_mode: bool,
    pub build_runner_mode: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            class_name: "Assets".to_string(),
            kind: OutputKind::Class,
            group_by_root: true,
            add_header: true,
            generate_map: true,
            watch_mode: false,
            build_runner_mode: false,
        }
    }
}

/// Render entries (already deduplicated and sorted) into Dart source.
pub fn render(entries: &[AssetEntry], options: &RenderOptions) -> String {
    let mut out = String::new();

    if options.add_header {
        out.push_str(HEADER_BANNER);
        out.push('\n');
        out.push_str(if options.watch_mode {
            HEADER_USAGE_WATCH
        } else {
            HEADER_USAGE
        });
        out.push('\n');
        if options.build_runner_mode {
            out.push_str(HEADER_BUILD_RUNNER);
            out.push('\n');
        }
        out.push('\n');
    }

    match options.kind {
        OutputKind::Enum => render_enum(&mut out, entries, &options.class_name),
        OutputKind::Class => render_class(&mut out, entries, options),
    }

    out
}

fn render_class(out: &mut String, entries: &[AssetEntry], options: &RenderOptions) {
    let name = &options.class_name;
    out.push_str(&format!("class {} {{\n", name));
    out.push_str(&format!("  {}._();\n", name));

    let ordered: Vec<&AssetEntry> = if options.group_by_root {
        let mut ordered = Vec::with_capacity(entries.len());
        for root in roots_in_order(entries) {
            out.push('\n');
            out.push_str(&format!("  // --- {} ---\n", root));
            for entry in entries.iter().filter(|e| e.root() == root) {
                push_binding(out, entry);
                ordered.push(entry);
            }
        }
        ordered
    } else {
        for entry in entries {
            push_binding(out, entry);
        }
        entries.iter().collect()
    };

    if options.generate_map {
        out.push('\n');
        out.push_str("  static const Map<String, String> map = {\n");
        for entry in ordered {
            out.push_str(&format!(
                "    \"{}\": {},\n",
                entry.identifier(),
                entry.identifier()
            ));
        }
        out.push_str("  };\n");
    }

    out.push_str("}\n");
}

fn push_binding(out: &mut String, entry: &AssetEntry) {
    let path = entry.full_path();
    out.push('\n');
    out.push_str(&format!("  /// {}\n", doc_line(&path)));
    out.push_str(&format!(
        "  static const String {} = \"{}\";\n",
        entry.identifier(),
        escape_dart(&path)
    ));
}

fn render_enum(out: &mut String, entries: &[AssetEntry], name: &str) {
    out.push_str(&format!("enum {} {{\n", name));

    if entries.is_empty() {
        out.push_str("  ;\n");
    }
    for (i, entry) in entries.iter().enumerate() {
        let path = entry.full_path();
        let terminator = if i + 1 == entries.len() { ';' } else { ',' };
        out.push_str(&format!("  /// {}\n", doc_line(&path)));
        out.push_str(&format!(
            "  {}(\"{}\"){}\n",
            entry.identifier(),
            escape_dart(&path),
            terminator
        ));
    }

    out.push('\n');
    out.push_str(&format!("  const {}(this.path);\n", name));
    out.push('\n');
    out.push_str("  final String path;\n");
    out.push('\n');
    out.push_str("  @override\n");
    out.push_str("  String toString() => path;\n");
    out.push('\n');
    out.push_str(&format!("  static const Map<String, {}> map = {{\n", name));
    for entry in entries {
        out.push_str(&format!(
            "    \"{}\": {}.{},\n",
            entry.identifier(),
            name,
            entry.identifier()
        ));
    }
    out.push_str("  };\n");
    out.push_str("}\n");
}

/// Roots in the order they first appear among the entries.
fn roots_in_order(entries: &[AssetEntry]) -> Vec<&str> {
    let mut roots: Vec<&str> = Vec::new();
    for entry in entries {
        if !roots.contains(&entry.root()) {
            roots.push(entry.root());
        }
    }
    roots
}

/// Escape a value for a double-quoted Dart string literal.
pub fn escape_dart(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('$', "\\$")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

fn doc_line(s: &str) -> String {
    s.replace(['\n', '\r'], " ")
}
