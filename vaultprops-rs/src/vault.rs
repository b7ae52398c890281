//! Filesystem-backed vault.

use crate::error::{Result, VaultError};
use crate::host::{text_index, DocumentStore, MetadataIndex};
use crate::types::{HeaderEntry, HeaderPosition, PropertyValue};
use glob::glob;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Represents an Obsidian vault on disk.
#[derive(Debug, Clone)]
pub struct Vault {
    /// Root path of the vault.
    pub root: PathBuf,
}

impl Vault {
    /// Create a new vault instance.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.is_dir() {
            return Err(VaultError::VaultNotFound(root));
        }

        Ok(Self { root })
    }

    /// Get the full path to a note.
    pub fn note_path(&self, relative_path: &Path) -> PathBuf {
        self.root.join(relative_path)
    }

    /// Normalize a note path (add .md extension if needed).
    pub fn normalize_note_path(&self, path: &str) -> PathBuf {
        let path = path.trim();
        if path.ends_with(".md") {
            PathBuf::from(path)
        } else {
            PathBuf::from(format!("{}.md", path))
        }
    }

    /// Check if a note exists.
    pub fn note_exists(&self, relative_path: &Path) -> bool {
        self.note_path(relative_path).is_file()
    }

    /// List all markdown files in the vault, sorted by path.
    ///
    /// Hidden files and directories (`.obsidian`, `.trash`, ...) are skipped.
    pub fn list_notes(&self) -> Result<Vec<PathBuf>> {
        let pattern = self.root.join("**/*.md");
        let pattern_str = pattern.to_string_lossy();

        let mut notes = Vec::new();

        for entry in glob(&pattern_str)? {
            match entry {
                Ok(path) => {
                    if let Ok(relative) = path.strip_prefix(&self.root) {
                        if !relative
                            .components()
                            .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
                        {
                            notes.push(relative.to_path_buf());
                        }
                    }
                }
                Err(e) => {
                    warn!(error = %e, "skipping unreadable vault entry");
                }
            }
        }

        notes.sort();

        Ok(notes)
    }

    /// Resolve a note name to a path.
    ///
    /// Handles exact paths, names without extension, and `aliases` entries.
    pub fn resolve_note(&self, query: &str) -> Result<PathBuf> {
        let normalized = self.normalize_note_path(query);
        if self.note_exists(&normalized) {
            return Ok(normalized);
        }

        let query_lower = query.to_lowercase();
        let mut matches: Vec<PathBuf> = Vec::new();

        for note_path in self.list_notes()? {
            let name = note_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("");

            if name.to_lowercase() == query_lower {
                matches.push(note_path);
                continue;
            }

            // Aliases need the frontmatter; unparseable notes simply don't match.
            let Ok(entries) = self.header_entries(&note_path) else {
                continue;
            };
            let aliased = entries
                .iter()
                .filter(|e| e.name == "aliases" || e.name == "alias")
                .any(|e| match &e.value {
                    PropertyValue::List(items) => {
                        items.iter().any(|a| a.to_lowercase() == query_lower)
                    }
                    PropertyValue::Scalar(s) => s.to_lowercase() == query_lower,
                    PropertyValue::Empty => false,
                });
            if aliased {
                matches.push(note_path);
            }
        }

        match matches.len() {
            0 => Err(VaultError::NoteNotFound(PathBuf::from(query))),
            1 => Ok(matches.remove(0)),
            count => Err(VaultError::Other(format!(
                "Ambiguous note '{}': {} notes match ({})",
                query,
                count,
                matches
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

impl DocumentStore for Vault {
    fn list_documents(&self) -> Result<Vec<PathBuf>> {
        self.list_notes()
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        if !self.note_exists(path) {
            return Err(VaultError::NoteNotFound(path.to_path_buf()));
        }
        Ok(std::fs::read_to_string(self.note_path(path))?)
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        if !self.note_exists(path) {
            return Err(VaultError::NoteNotFound(path.to_path_buf()));
        }
        debug!(path = %path.display(), bytes = content.len(), "writing note");
        std::fs::write(self.note_path(path), content)?;
        Ok(())
    }
}

impl MetadataIndex for Vault {
    fn header_position(&self, path: &Path) -> Result<Option<HeaderPosition>> {
        Ok(text_index::header_position(&self.read_text(path)?))
    }

    fn header_entries(&self, path: &Path) -> Result<Vec<HeaderEntry>> {
        text_index::header_entries(&self.read_text(path)?, path)
    }

    fn inline_tags(&self, path: &Path) -> Result<Vec<String>> {
        Ok(text_index::inline_tags(&self.read_text(path)?))
    }
}
