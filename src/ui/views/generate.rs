use std::path::Path;

use assetgen::GenerationResult;

use crate::ui::blocks::header::render_header;
use crate::ui::style::{Icon, Style, Tone};

pub fn render_generate_header(config: &Path, output: &Path, dry_run: bool, style: Style) -> String {
    let mut fields = vec![
        ("Config", config.display().to_string()),
        ("Output", output.display().to_string()),
    ];
    if dry_run {
        fields.push(("Mode", "dry run, nothing is written".to_string()));
    }
    render_header(Icon::Generate, "assetgen", &fields, style)
}

/// One-line outcome of a generation pass.
pub fn render_generate_summary(result: &GenerationResult, dry_run: bool, style: Style) -> String {
    let assets = plural(result.count, "asset");
    let output = result.output.display();

    if result.skipped {
        format!("{} Up to date: {} in {}\n", style.icon(Icon::Unchanged), assets, output)
    } else if dry_run {
        format!("{} Would write {} to {}\n", style.icon(Icon::Diff), assets, output)
    } else {
        format!(
            "{} Generated {} {} {}\n",
            style.icon(Icon::Done),
            assets,
            style.paint("->", Tone::Muted),
            output
        )
    }
}

pub fn render_warnings(warnings: &[String], style: Style) -> String {
    let icon = style.icon(Icon::Warning);
    warnings
        .iter()
        .map(|w| format!("{} {}\n", icon, w))
        .collect()
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
