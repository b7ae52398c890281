//! Path-prefix exclusion of notes from queries and aggregates.

use std::path::Path;

/// Notes under any of these prefixes are invisible to the query engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionFilter {
    prefixes: Vec<String>,
}

impl ExclusionFilter {
    /// Blank prefixes are dropped; an empty prefix would exclude every note.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(|p| p.as_ref().trim().to_string())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Build from a newline-delimited list.
    pub fn from_lines(lines: &str) -> Self {
        Self::new(lines.lines())
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}
