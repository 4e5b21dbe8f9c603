use crate::ui::style::{Icon, Style, Tone};

/// Title line followed by aligned `label: value` rows.
pub fn render_header(icon: Icon, title: &str, fields: &[(&str, String)], style: Style) -> String {
    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut out = format!("{} {}\n", style.icon(icon), style.strong(title, Tone::Accent));
    for (label, value) in fields {
        let label = format!("{:<width$}", format!("{}:", label), width = width + 1);
        out.push_str(&format!("  {} {}\n", style.paint(&label, Tone::Muted), value));
    }
    out
}
