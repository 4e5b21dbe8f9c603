use assetgen::domain::ports::ManifestValidation;

use crate::ui::style::{Icon, Style, Tone};

/// Human-readable manifest report.
pub fn render_validation(validation: &ManifestValidation, style: Style) -> String {
    let mut out = String::new();

    push_list(
        &mut out,
        style,
        Icon::Failed,
        Tone::Bad,
        "Not declared in pubspec.yaml",
        &validation.missing_assets,
    );
    push_list(
        &mut out,
        style,
        Icon::Warning,
        Tone::Caution,
        "Declared but not found",
        &validation.unused_assets,
    );

    for warning in &validation.warnings {
        out.push_str(&format!(
            "{} {}\n",
            style.icon(Icon::Warning),
            style.paint(warning, Tone::Muted)
        ));
    }

    if validation.is_valid && validation.unused_assets.is_empty() {
        out.push_str(&format!(
            "{} pubspec.yaml declares every asset\n",
            style.icon(Icon::Done)
        ));
    }

    out
}

fn push_list(out: &mut String, style: Style, icon: Icon, tone: Tone, title: &str, paths: &[String]) {
    if paths.is_empty() {
        return;
    }
    let title = format!("{} ({}):", title, paths.len());
    out.push_str(&format!("{} {}\n", style.icon(icon), style.paint(&title, tone)));
    for path in paths {
        out.push_str(&format!("  - {}\n", path));
    }
}
