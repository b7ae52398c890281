//! In-memory vault, for tests and for embedding the engine over non-file notes.

use crate::error::{Result, VaultError};
use crate::host::{text_index, DocumentStore, MetadataIndex};
use crate::types::{HeaderEntry, HeaderPosition};
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

/// Notes held in memory, enumerated in insertion order.
#[derive(Debug, Default)]
pub struct MemoryVault {
    notes: RefCell<Vec<(PathBuf, String)>>,
    read_only: Cell<bool>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vault from `(path, content)` pairs.
    pub fn with_notes<P, C>(notes: impl IntoIterator<Item = (P, C)>) -> Self
    where
        P: Into<PathBuf>,
        C: Into<String>,
    {
        let vault = Self::new();
        for (path, content) in notes {
            vault.insert(path, content);
        }
        vault
    }

    /// Add or replace a note.
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let content = content.into();
        let mut notes = self.notes.borrow_mut();
        match notes.iter_mut().find(|(p, _)| *p == path) {
            Some((_, existing)) => *existing = content,
            None => notes.push((path, content)),
        }
    }

    /// Current content of a note, if present.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.notes
            .borrow()
            .iter()
            .find(|(p, _)| p == path.as_ref())
            .map(|(_, c)| c.clone())
    }

    /// Make every subsequent write fail.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }
}

impl DocumentStore for MemoryVault {
    fn list_documents(&self) -> Result<Vec<PathBuf>> {
        Ok(self.notes.borrow().iter().map(|(p, _)| p.clone()).collect())
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        self.get(path)
            .ok_or_else(|| VaultError::NoteNotFound(path.to_path_buf()))
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        if self.read_only.get() {
            return Err(VaultError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "vault is read-only",
            )));
        }
        let mut notes = self.notes.borrow_mut();
        let (_, existing) = notes
            .iter_mut()
            .find(|(p, _)| p == path)
            .ok_or_else(|| VaultError::NoteNotFound(path.to_path_buf()))?;
        *existing = content.to_string();
        Ok(())
    }
}

impl MetadataIndex for MemoryVault {
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
