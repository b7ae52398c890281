//! Query conditions.

use regex::Regex;
use serde::Serialize;
use std::path::PathBuf;

/// Whether a property or tag must be present or absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Includes,
    Excludes,
}

impl Presence {
    /// Turn a membership test into a pass/fail.
    pub fn accepts(self, found: bool) -> bool {
        match self {
            Presence::Includes => found,
            Presence::Excludes => !found,
        }
    }
}

/// Whether a pattern must hit or miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternOp {
    Matches,
    NotMatches,
}

impl PatternOp {
    pub fn accepts(self, hit: bool) -> bool {
        match self {
            PatternOp::Matches => hit,
            PatternOp::NotMatches => !hit,
        }
    }
}

/// One filter in a query. A query is a conjunction of conditions.
///
/// Patterns are compiled when the condition is built and searched
/// unanchored; use `^`/`$` to anchor.
#[derive(Debug, Clone)]
pub enum Condition {
    /// A frontmatter key is (not) present.
    Header { presence: Presence, name: String },
    /// A frontmatter key is present and its value renders exactly as `value`.
    HeaderValue { name: String, value: String },
    /// A tag is (not) on the note.
    Tag { presence: Presence, tag: String },
    /// The file stem matches a pattern.
    Filename { op: PatternOp, pattern: Regex },
    /// The full note path matches a pattern.
    Path { op: PatternOp, pattern: Regex },
}

/// Paths matched by a `select` query.
#[derive(Debug, Clone, Serialize)]
pub struct SelectResult {
    pub count: usize,
    pub notes: Vec<PathBuf>,
}

impl SelectResult {
    pub fn new(notes: Vec<PathBuf>) -> Self {
        Self {
            count: notes.len(),
            notes,
        }
    }
}

/// A tag with the number of notes carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}
