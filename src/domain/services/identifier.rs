//! Identifier builder
//!
//! Turns a root-relative asset path into a Dart identifier. Pure and
//! deterministic: repeated runs over the same tree must produce the same
//! names, otherwise the idempotent write would never skip.

use crate::domain::value_objects::NamingCase;

/// Identifier returned when a path has no alphanumeric content at all.
pub const FALLBACK_IDENTIFIER: &str = "_";

/// Build the identifier for `relative_path`.
///
/// Nested files drop their extension (`icons/play_button.svg` → `iconsPlayButton`);
/// files directly under a root keep it as a trailing segment
/// (`logo.png` → `logoPng`) so `logo.png` and `logo.svg` stay distinct.
///
/// Keeping the extension at the top level is a deliberate exception to
/// stripping it everywhere: `logo.png` gives `logoPng`, `img/logo.png` gives
/// `imgLogo`.
pub fn build_identifier(relative_path: &str, case: NamingCase, prefix: &str) -> String {
    let segments = split_segments(strip_extension(relative_path));
    if segments.is_empty() {
        return FALLBACK_IDENTIFIER.to_string();
    }

    let mut identifier = match case {
        NamingCase::Snake => segments
            .iter()
            .map(|s| s.to_lowercase())
            .collect::<Vec<_>>()
            .join("_"),
        NamingCase::Keep => segments.join("_"),
        NamingCase::Camel => camel_case(&segments),
    };

    if !prefix.is_empty() {
        identifier = format!("{}{}", prefix, capitalize_first(&identifier));
    }

    if identifier.starts_with(|c: char| c.is_ascii_digit()) {
        identifier.insert(0, '_');
    }

    identifier
}

fn strip_extension(path: &str) -> &str {
    let Some(slash) = path.rfind('/') else {
        return path;
    };
    match path.rfind('.') {
        Some(dot) if dot > slash => &path[..dot],
        _ => path,
    }
}

/// Split on `/` and on every run of non-`[A-Za-z0-9]` characters.
fn split_segments(path: &str) -> Vec<&str> {
    path.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect()
}

fn camel_case(segments: &[&str]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i == 0 {
            out.push_str(&segment.to_lowercase());
        } else {
            out.push_str(&capitalize_first(segment));
        }
    }
    out
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_strips_nested_extension() {
        assert_eq!(
            build_identifier("icons/play_button.svg", NamingCase::Camel, ""),
            "iconsPlayButton"
        );
    }

    #[test]
    fn snake_lowercases_and_joins() {
        assert_eq!(
            build_identifier("icons/play-button.svg", NamingCase::Snake, ""),
            "icons_play_button"
        );
        assert_eq!(
            build_identifier("Icons/Play Button.svg", NamingCase::Snake, ""),
            "icons_play_button"
        );
    }

    #[test]
    fn keep_preserves_casing() {
        assert_eq!(
            build_identifier("Icons/playButton.svg", NamingCase::Keep, ""),
            "Icons_playButton"
        );
    }

    #[test]
    fn camel_keeps_tail_of_later_segments() {
        assert_eq!(
            build_identifier("Fonts/openSans-BOLD.ttf", NamingCase::Camel, ""),
            "fontsOpenSansBOLD"
        );
    }

    #[test]
    fn digit_leading_identifier_gets_underscore() {
        assert_eq!(
            build_identifier("1logo/main.png", NamingCase::Camel, ""),
            "_1logoMain"
        );
    }

    #[test]
    fn top_level_file_keeps_extension_segment() {
        assert_eq!(build_identifier("logo.png", NamingCase::Camel, ""), "logoPng");
        assert_eq!(build_identifier("icon.svg", NamingCase::Snake, ""), "icon_svg");
    }

    #[test]
    fn same_file_one_level_down_drops_extension() {
        assert_eq!(build_identifier("img/logo.png", NamingCase::Camel, ""), "imgLogo");
    }

    #[test]
    fn prefix_acts_as_leading_segment() {
        assert_eq!(
            build_identifier("icons/play.svg", NamingCase::Camel, "asset"),
            "assetIconsPlay"
        );
        assert_eq!(
            build_identifier("icons/play.svg", NamingCase::Snake, "img_"),
            "img_Icons_play"
        );
    }

    #[test]
    fn digit_guard_applies_after_prefix() {
        assert_eq!(build_identifier("a/b.png", NamingCase::Camel, "2x"), "_2xAB");
    }

    #[test]
    fn punctuation_only_path_falls_back() {
        assert_eq!(build_identifier("--/__.png", NamingCase::Camel, "p"), "_");
        assert_eq!(build_identifier("", NamingCase::Camel, ""), "_");
    }

    #[test]
    fn dot_in_directory_is_not_an_extension() {
        assert_eq!(
            build_identifier("v1.2/readme", NamingCase::Camel, ""),
            "v12Readme"
        );
    }
}
