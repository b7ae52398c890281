//! Tag resolution: inline `#tags` merged with the `tags`/`tag` property.

use crate::types::HeaderEntry;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// Normalize a tag name: drop one leading `#` and compose to NFC.
pub fn normalize_tag(tag: &str) -> String {
    tag.strip_prefix('#').unwrap_or(tag).nfc().collect()
}

/// Split a frontmatter tag value (`"a, b,c"`) into tags.
///
/// All whitespace is removed, not just trimmed, so `to do` becomes `todo`.
pub fn split_tag_value(value: &str) -> Vec<String> {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .split(',')
        .filter(|t| !t.is_empty())
        .map(normalize_tag)
        .collect()
}

/// The note's tag set, in first-seen order.
///
/// Inline tags come first. Frontmatter contributes `tags` when present,
/// otherwise `tag`; never both.
pub fn resolve_tags(inline_tags: &[String], entries: &[HeaderEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    let header_value = entries
        .iter()
        .find(|e| e.name == "tags")
        .or_else(|| entries.iter().find(|e| e.name == "tag"))
        .map(|e| e.value.as_display_string())
        .unwrap_or_default();

    let inline = inline_tags.iter().map(|t| normalize_tag(t));
    for tag in inline.chain(split_tag_value(&header_value)) {
        if seen.insert(tag.clone()) {
            tags.push(tag);
        }
    }

    tags
}
