//! YAML frontmatter detection and entry indexing.

use crate::error::{Result, VaultError};
use crate::types::{scalar_to_string, HeaderEntry, HeaderPosition, PropertyValue};
use serde_yaml::{Mapping, Value};
use std::collections::HashMap;
use std::path::Path;

const FENCE: &str = "---";

/// Locate the frontmatter fences.
///
/// Frontmatter must open on the very first line and close on a later line
/// consisting solely of `---`.
pub fn locate_frontmatter(content: &str) -> Option<HeaderPosition> {
    let mut lines = content.lines();
    if lines.next()?.trim_end() != FENCE {
        return None;
    }

    lines
        .position(|line| line.trim_end() == FENCE)
        .map(|offset| HeaderPosition {
            start_line: 0,
            end_line: offset + 1,
        })
}

/// Raw YAML between the fences (without delimiters).
pub fn extract_frontmatter(content: &str) -> Option<String> {
    let position = locate_frontmatter(content)?;
    let yaml = content
        .lines()
        .skip(position.start_line + 1)
        .take(position.end_line - position.start_line - 1)
        .collect::<Vec<_>>()
        .join("\n");
    Some(yaml)
}

/// The body of the note: everything after the closing fence.
pub fn split_body(content: &str) -> String {
    match locate_frontmatter(content) {
        Some(position) => content
            .lines()
            .skip(position.end_line + 1)
            .collect::<Vec<_>>()
            .join("\n"),
        None => content.to_string(),
    }
}

/// Parse frontmatter into a YAML mapping, with path context for errors.
pub fn parse_frontmatter_with_path(content: &str, path: &Path) -> Result<Option<Mapping>> {
    let Some(yaml) = extract_frontmatter(content) else {
        return Ok(None);
    };

    let value: Value = serde_yaml::from_str(&yaml).map_err(|e| VaultError::InvalidFrontmatter {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    match value {
        Value::Null => Ok(Some(Mapping::new())),
        Value::Mapping(map) => Ok(Some(map)),
        _ => Err(VaultError::InvalidFrontmatter {
            path: path.to_path_buf(),
            message: "Frontmatter is not a mapping".to_string(),
        }),
    }
}

/// Index the top-level frontmatter entries with their source line spans.
///
/// Entries come back in textual order. A span covers the key line plus any
/// continuation lines (indented, or block-sequence items starting with `-`).
pub fn index_frontmatter(content: &str, path: &Path) -> Result<Vec<HeaderEntry>> {
    let Some(position) = locate_frontmatter(content) else {
        return Ok(Vec::new());
    };
    let map = parse_frontmatter_with_path(content, path)?.unwrap_or_default();

    // Keys like `2024:` or `true:` parse as numbers and bools, so look values
    // up by the key's text.
    let values: HashMap<String, &Value> = map
        .iter()
        .map(|(key, value)| (scalar_to_string(key), value))
        .collect();

    let lines: Vec<&str> = content.lines().collect();
    let mut entries: Vec<HeaderEntry> = Vec::new();

    for idx in (position.start_line + 1)..position.end_line {
        let line = lines[idx];

        if is_continuation(line) {
            if let Some(last) = entries.last_mut() {
                if last.end_line + 1 == idx {
                    last.end_line = idx;
                }
            }
            continue;
        }

        let Some(name) = top_level_key(line) else {
            continue;
        };

        let value = values
            .get(&name)
            .map(|v| PropertyValue::from_yaml(v))
            .unwrap_or(PropertyValue::Empty);

        entries.push(HeaderEntry {
            name,
            value,
            line: idx,
            end_line: idx,
        });
    }

    Ok(entries)
}

fn is_continuation(line: &str) -> bool {
    line.starts_with(' ') || line.starts_with('\t') || line.starts_with('-')
}

/// Extract the key of a `key: value` line at column 0.
fn top_level_key(line: &str) -> Option<String> {
    if line.starts_with('#') {
        return None;
    }
    let key = line[..key_separator(line)?].trim();
    let key = if key.starts_with(['"', '\'']) {
        serde_yaml::from_str::<String>(key).ok()?
    } else {
        key.to_string()
    };

    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

/// Byte offset of the colon that ends a top-level key.
///
/// A quoted key may itself contain colons, so the search starts after its
/// closing quote.
pub(crate) fn key_separator(line: &str) -> Option<usize> {
    let from = match line.chars().next()? {
        quote @ ('"' | '\'') => closing_quote(line, quote)? + 1,
        _ => 0,
    };
    line[from..].find(':').map(|offset| from + offset)
}

/// Index of the quote closing a key that opens with `quote` at byte 0.
fn closing_quote(line: &str, quote: char) -> Option<usize> {
    let mut chars = line.char_indices().skip(1).peekable();
    while let Some((idx, c)) = chars.next() {
        if c == '\\' && quote == '"' {
            chars.next();
        } else if c == quote {
            // '' is an escaped quote inside a single-quoted scalar
            if quote == '\'' && chars.peek().is_some_and(|&(_, next)| next == '\'') {
                chars.next();
            } else {
                return Some(idx);
            }
        }
    }
    None
}
