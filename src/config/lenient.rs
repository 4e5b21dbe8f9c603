//! Tolerant line-oriented configuration parser
//!
//! Used by the build hook, which must never fail on a config file a YAML
//! parser would reject. Recognized forms:
//!
//! ```text
//! key: value
//! key: [a, b]
//! key:
//!   - a
//!   - b
//! ```
//!
//! Unknown keys and unparsable values are ignored and leave the default.

use std::path::PathBuf;

use super::types::{normalize_extension, GeneratorConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
enum RawValue {
    Null,
    Scalar(String),
    List(Vec<String>),
}

/// Parse `content` into a configuration, starting from the defaults.
pub fn parse(content: &str) -> GeneratorConfig {
    let mut config = GeneratorConfig::default();
    for (key, value) in parse_pairs(content) {
        apply(&mut config, &key, value);
    }
    config
}

fn parse_pairs(content: &str) -> Vec<(String, RawValue)> {
    let mut pairs: Vec<(String, RawValue)> = Vec::new();

    for raw_line in content.lines() {
        let line = strip_comment(raw_line);
        if line.trim().is_empty() {
            continue;
        }

        let indented = line.starts_with([' ', '\t']);
        let trimmed = line.trim();

        if let Some(item) = trimmed.strip_prefix('-') {
            if indented || trimmed.starts_with("- ") || item.is_empty() {
                if let Some((_, value)) = pairs.last_mut() {
                    let item = unquote(item.trim()).to_string();
                    match value {
                        RawValue::List(items) => items.push(item),
                        RawValue::Null => *value = RawValue::List(vec![item]),
                        RawValue::Scalar(_) => {}
                    }
                }
                continue;
            }
        }

        if indented {
            continue;
        }

        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };
        let key = key.trim().to_string();
        let value = value.trim();

        let parsed = if value.is_empty() || value == "~" || value == "null" {
            RawValue::Null
        } else if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
            RawValue::List(
                inner
                    .split(',')
                    .map(|s| unquote(s.trim()).to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            )
        } else {
            RawValue::Scalar(unquote(value).to_string())
        };

        pairs.push((key, parsed));
    }

    pairs
}

fn apply(config: &mut GeneratorConfig, key: &str, value: RawValue) {
    match key {
        "roots" => {
            if let Some(list) = as_list(value) {
                config.roots = list;
            }
        }
        "exclude" => {
            if let Some(list) = as_list(value) {
                config.exclude = list;
            }
        }
        "include_extensions" => {
            config.include_extensions =
                as_list(value).map(|list| list.iter().map(|e| normalize_extension(e)).collect());
        }
        "output" => {
            if let RawValue::Scalar(s) = value {
                config.output = PathBuf::from(s);
            }
        }
        "class_name" => {
            if let RawValue::Scalar(s) = value {
                config.class_name = s;
            }
        }
        "prefix" => match value {
            RawValue::Scalar(s) => config.prefix = s,
            RawValue::Null => config.prefix = String::new(),
            RawValue::List(_) => {}
        },
        "case" => {
            if let RawValue::Scalar(s) = value {
                config.naming_case = s.as_str().into();
            }
        }
        "sort" => {
            if let RawValue::Scalar(s) = value {
                config.sort = s.as_str().into();
            }
        }
        "pubspec_path" => {
            config.pubspec_path = match value {
                RawValue::Scalar(s) => Some(PathBuf::from(s)),
                _ => None,
            };
        }
        "group_by_root" => set_bool(&mut config.group_by_root, &value),
        "add_header" => set_bool(&mut config.add_header, &value),
        "generate_map" => set_bool(&mut config.generate_map, &value),
        "watch_mode" => set_bool(&mut config.watch_mode, &value),
        "generate_enum" => set_bool(&mut config.generate_enum, &value),
        "validate_pubspec" => set_bool(&mut config.validate_pubspec, &value),
        "build_runner_mode" => set_bool(&mut config.build_runner_mode, &value),
        _ => {}
    }
}

fn as_list(value: RawValue) -> Option<Vec<String>> {
    match value {
        RawValue::List(items) => Some(items),
        RawValue::Scalar(s) => Some(vec![s]),
        RawValue::Null => None,
    }
}

fn set_bool(target: &mut bool, value: &RawValue) {
    if let RawValue::Scalar(s) = value {
        match s.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" => *target = true,
            "false" | "no" | "off" => *target = false,
            _ => {}
        }
    }
}

/// Drop a `#` comment that starts the line or follows whitespace.
fn strip_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'#' && (i == 0 || bytes[i - 1] == b' ' || bytes[i - 1] == b'\t') {
            return &line[..i];
        }
    }
    line
}

fn unquote(s: &str) -> &str {
    let quoted = s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\'')));
    if quoted {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
