use std::path::Path;

use assetgen::ConfigWarning;

use crate::ui::style::{Icon, Style, Tone};

pub fn render_config_warnings(path: &Path, warnings: &[ConfigWarning], style: Style) -> String {
    let mut out = String::new();
    for warning in warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", path.display(), line),
            None => path.display().to_string(),
        };
        out.push_str(&format!(
            "{} Unknown config key '{}' in {}\n",
            style.icon(Icon::Warning),
            warning.key,
            location
        ));
        if let Some(suggestion) = &warning.suggestion {
            let hint = format!("Did you mean '{}'?", suggestion);
            out.push_str(&format!("   {}\n", style.paint(&hint, Tone::Muted)));
        }
    }
    out
}

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], style: Style) {
    eprint!("{}", render_config_warnings(path, warnings, style));
}
