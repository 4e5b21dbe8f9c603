use similar::{ChangeTag, TextDiff};

use crate::ui::style::{Style, Tone};

/// Lines of unchanged context around each hunk
const CONTEXT_LINES: usize = 3;

/// Unified diff of the on-disk output against the freshly rendered text,
/// with old/new line numbers in the gutter. Empty when nothing changed.
pub fn render_output_diff(path: &str, old: &str, new: &str, style: Style) -> String {
    let diff = TextDiff::from_lines(old, new);
    let groups = diff.grouped_ops(CONTEXT_LINES);
    if groups.is_empty() {
        return String::new();
    }

    let width = old
        .lines()
        .count()
        .max(new.lines().count())
        .max(1)
        .to_string()
        .len();

    let mut out = String::new();
    out.push_str(&style.paint(&format!("--- a/{}", path), Tone::Accent));
    out.push('\n');
    out.push_str(&style.paint(&format!("+++ b/{}", path), Tone::Accent));
    out.push('\n');

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push_str(&style.paint("...", Tone::Accent));
            out.push('\n');
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let (old_no, new_no, sign) = match change.tag() {
                    ChangeTag::Delete => (change.old_index(), None, "-"),
                    ChangeTag::Insert => (None, change.new_index(), "+"),
                    ChangeTag::Equal => (change.old_index(), change.new_index(), " "),
                };

                let column = |n: Option<usize>| {
                    n.map(|n| format!("{:>width$}", n + 1, width = width))
                        .unwrap_or_else(|| " ".repeat(width))
                };

                let value = change.value().trim_end_matches('\n');
                let line = format!("{} {} {} {}", column(old_no), column(new_no), sign, value);
                out.push_str(&style.paint(&line, tone(change.tag())));
                out.push('\n');
            }
        }
    }

    out
}

fn tone(tag: ChangeTag) -> Tone {
    match tag {
        ChangeTag::Delete => Tone::Bad,
        ChangeTag::Insert => Tone::Good,
        ChangeTag::Equal => Tone::Muted,
    }
}
