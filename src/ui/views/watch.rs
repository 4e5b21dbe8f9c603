use assetgen::WatchEvent;

use crate::ui::blocks::header::render_header;
use crate::ui::style::{Icon, Style};
use crate::ui::views::generate::render_warnings;
use crate::ui::views::validation::render_validation;

pub fn render_watch_header(roots: &[String], output: &str, style: Style) -> String {
    render_header(
        Icon::Watch,
        "assetgen watch",
        &[
            ("Roots", roots.join(", ")),
            ("Output", output.to_string()),
            ("Stop", "Ctrl+C".to_string()),
        ],
        style,
    )
}

/// One timestamped block per event.
pub fn render_watch_event(timestamp: &str, event: &WatchEvent, style: Style) -> String {
    let line = |icon: Icon, text: String| format!("[{}] {} {}\n", timestamp, style.icon(icon), text);

    match event {
        WatchEvent::WatchStarted { roots } => {
            line(Icon::Watch, format!("Watching: {}", roots.join(", ")))
        }
        WatchEvent::RootSkipped { root } => {
            line(Icon::Warning, format!("Skipping missing root: {}", root))
        }
        WatchEvent::FileChanged { path } => line(Icon::Hint, format!("Changed: {}", path)),
        WatchEvent::GenerationStarted => line(Icon::Working, "Generating...".to_string()),
        WatchEvent::GenerationComplete {
            count,
            skipped,
            warnings,
            validation,
            output,
        } => {
            let mut out = if *skipped {
                line(Icon::Unchanged, format!("Up to date: {} assets", count))
            } else {
                line(Icon::Done, format!("Generated {} assets -> {}", count, output))
            };
            out.push_str(&render_warnings(warnings, style));
            if let Some(validation) = validation {
                out.push_str(&render_validation(validation, style));
            }
            out
        }
        WatchEvent::Error { message } => line(Icon::Failed, format!("Error: {}", message)),
        WatchEvent::Shutdown => format!("\n{}", line(Icon::Watch, "Watch stopped.".to_string())),
    }
}
