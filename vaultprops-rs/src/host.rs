//! The collaborator contract between the property engine and its host.
//!
//! The engine never touches the filesystem directly. It enumerates and
//! rewrites notes through a [`DocumentStore`] and learns about frontmatter and
//! tags through a [`MetadataIndex`]. [`crate::Vault`] implements both over a
//! directory on disk; [`crate::MemoryVault`] implements both in memory.

use crate::error::Result;
use crate::parser::{index_frontmatter, locate_frontmatter, parse_tags, split_body};
use crate::types::{HeaderEntry, HeaderPosition};
use std::path::{Path, PathBuf};

/// Enumeration and raw text access for notes.
pub trait DocumentStore {
    /// All note paths, in the order queries report them.
    fn list_documents(&self) -> Result<Vec<PathBuf>>;

    fn read_text(&self, path: &Path) -> Result<String>;

    fn write_text(&self, path: &Path, content: &str) -> Result<()>;
}

/// Structured view of a note's metadata.
pub trait MetadataIndex {
    /// Fence lines of the frontmatter block, if the note starts with one.
    fn header_position(&self, path: &Path) -> Result<Option<HeaderPosition>>;

    /// Top-level frontmatter entries in source order.
    fn header_entries(&self, path: &Path) -> Result<Vec<HeaderEntry>>;

    /// Inline tags from the note body, including the leading `#`.
    fn inline_tags(&self, path: &Path) -> Result<Vec<String>>;
}

/// Everything the engine needs from its surroundings.
pub trait Host: DocumentStore + MetadataIndex {}

impl<T: DocumentStore + MetadataIndex> Host for T {}

/// Index helpers for hosts whose metadata is derived straight from note text.
pub mod text_index {
    use super::*;

    pub fn header_position(content: &str) -> Option<HeaderPosition> {
        locate_frontmatter(content)
    }

    pub fn header_entries(content: &str, path: &Path) -> Result<Vec<HeaderEntry>> {
        index_frontmatter(content, path)
    }

    pub fn inline_tags(content: &str) -> Vec<String> {
        parse_tags(&split_body(content))
    }
}
