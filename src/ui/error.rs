use assetgen::AssetGenError;

use crate::ui::style::{Icon, Style, Tone};
use crate::ui::terminal::Terminal;

pub fn format_error(err: &anyhow::Error, style: Style) -> String {
    let mut out = format!(
        "{} {}\n",
        style.icon(Icon::Failed),
        style.strong(&err.to_string(), Tone::Bad)
    );

    if let Some(hint) = err.downcast_ref::<AssetGenError>().and_then(hint_for) {
        out.push_str(&format!(
            "  {} {}\n",
            style.glyph(Icon::Hint),
            style.paint(hint, Tone::Muted)
        ));
    }

    out
}

fn hint_for(err: &AssetGenError) -> Option<&'static str> {
    match err {
        AssetGenError::InvalidConfig { .. } => {
            Some("Fix the YAML syntax, or delete the file to use the defaults.")
        }
        AssetGenError::OutputWrite { .. } => {
            Some("Check that the output directory is writable and not a file.")
        }
        AssetGenError::InvalidPattern { .. } => {
            Some("Only `*` is a wildcard in exclude patterns.")
        }
        _ => None,
    }
}

/// Report a fatal error on stderr, or as a JSON `error` event on stdout.
pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        }));
        return;
    }

    eprint!("{}", format_error(err, Terminal::detect().style()));
}
