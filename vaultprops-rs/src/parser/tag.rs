//! Inline tag parsing (#tag and #tag/subtag).

use regex::Regex;
use std::sync::LazyLock;

// # preceded by start of line or a non-word, non-& char (so HTML entities and
// `a#b` are skipped). Digits-only names like #123 are rejected afterwards.
static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\w&#])#([\w/-]+)").unwrap()
});

static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"``(?:[^`]|`[^`])*``|`[^`\n]+`").unwrap()
});

static WIKILINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[[^\]\n]*\]\]").unwrap()
});

/// Parse all inline tags from a note body, in order, each with its leading `#`.
pub fn parse_tags(body: &str) -> Vec<String> {
    let mut tags = Vec::new();
    let mut fence: Option<String> = None;

    for line in body.lines() {
        let trimmed = line.trim_start();

        if let Some(open) = &fence {
            if trimmed.starts_with(open.as_str()) && trimmed.trim_end().chars().all(|c| c == '`' || c == '~') {
                fence = None;
            }
            continue;
        }
        if let Some(marker) = fence_marker(trimmed) {
            fence = Some(marker);
            continue;
        }

        let masked = mask(line);
        for cap in TAG.captures_iter(&masked) {
            let Some(name) = cap.get(1) else { continue };
            if name.as_str().chars().all(|c| c.is_ascii_digit() || c == '/' || c == '-') {
                continue;
            }
            tags.push(format!("#{}", &line[name.range()]));
        }
    }

    tags
}

/// Opening fence marker (``` or ~~~, possibly longer) if the line opens one.
fn fence_marker(trimmed: &str) -> Option<String> {
    for fence_char in ['`', '~'] {
        let run = trimmed.chars().take_while(|&c| c == fence_char).count();
        if run >= 3 {
            return Some(fence_char.to_string().repeat(run));
        }
    }
    None
}

/// Blank out inline code and wikilinks, keeping byte offsets stable.
fn mask(line: &str) -> String {
    let mut masked = line.to_string();
    for re in [&*INLINE_CODE, &*WIKILINK] {
        let ranges: Vec<_> = re.find_iter(&masked).map(|m| m.range()).collect();
        for range in ranges {
            let blank = " ".repeat(range.len());
            masked.replace_range(range, &blank);
        }
    }
    masked
}
