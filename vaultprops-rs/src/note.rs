//! Read-only view over a note's frontmatter and tags.

use crate::error::{Result, VaultError};
use crate::host::MetadataIndex;
use crate::tags;
use crate::types::{HeaderEntry, HeaderPosition};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A snapshot of one note's metadata, taken from the host index.
///
/// Snapshots are cheap and short-lived: every edit loads a fresh one so it
/// always reflects the text currently on disk.
#[derive(Debug, Clone)]
pub struct Note {
    /// Path relative to vault root (e.g., "proj/My Project.md").
    pub path: PathBuf,
    position: Option<HeaderPosition>,
    entries: Vec<HeaderEntry>,
    inline_tags: Vec<String>,
}

impl Note {
    /// Load a snapshot through the metadata index.
    pub fn load<I: MetadataIndex + ?Sized>(index: &I, path: &Path) -> Result<Self> {
        let position = index.header_position(path)?;
        let entries = match position {
            Some(_) => index.header_entries(path)?,
            None => Vec::new(),
        };
        let inline_tags = index.inline_tags(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            position,
            entries,
            inline_tags,
        })
    }

    /// Assemble a snapshot from already-known metadata.
    pub fn from_parts(
        path: impl Into<PathBuf>,
        position: Option<HeaderPosition>,
        entries: Vec<HeaderEntry>,
        inline_tags: Vec<String>,
    ) -> Self {
        Self {
            path: path.into(),
            position,
            entries: if position.is_some() { entries } else { Vec::new() },
            inline_tags,
        }
    }

    /// Get the note name (filename without .md extension).
    pub fn name(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
    }

    pub fn has_header(&self) -> bool {
        self.position.is_some()
    }

    pub fn header_position(&self) -> Option<HeaderPosition> {
        self.position
    }

    /// Line of the opening fence. Only meaningful when the note has a header.
    pub fn header_start_line(&self) -> Result<usize> {
        self.position
            .map(|p| p.start_line)
            .ok_or_else(|| VaultError::NoHeader(self.path.clone()))
    }

    /// Frontmatter entries in source order; empty without a header.
    pub fn entries(&self) -> &[HeaderEntry] {
        &self.entries
    }

    pub fn entry(&self, name: &str) -> Option<&HeaderEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn property_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    /// The property rendered as text.
    ///
    /// A missing property and an empty one both come back as "".
    pub fn property_value_as_string(&self, name: &str) -> String {
        self.entry(name)
            .map(|e| e.value.as_display_string())
            .unwrap_or_default()
    }

    /// Inline tags as reported by the index (with the leading `#`).
    pub fn inline_tags(&self) -> &[String] {
        &self.inline_tags
    }

    /// Normalized tags from the body and the `tags`/`tag` property.
    pub fn tags(&self) -> Vec<String> {
        tags::resolve_tags(&self.inline_tags, &self.entries)
    }

    pub fn has_tag(&self, name: &str) -> bool {
        let wanted = tags::normalize_tag(name);
        self.tags().iter().any(|t| *t == wanted)
    }
}

/// Output representation of a note for CLI listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteInfo {
    pub path: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

impl NoteInfo {
    pub fn from_path(vault_root: &Path, relative_path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(vault_root.join(relative_path))?;

        let modified = metadata
            .modified()
            .ok()
            .map(|t| chrono::DateTime::<chrono::Utc>::from(t).to_rfc3339());

        let name = relative_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();

        Ok(Self {
            path: relative_path.to_string_lossy().to_string(),
            name,
            modified,
            size_bytes: Some(metadata.len()),
        })
    }
}
