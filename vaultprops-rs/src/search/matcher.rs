//! Condition evaluation and document selection.

use crate::error::{Result, VaultError};
use crate::exclusion::ExclusionFilter;
use crate::host::Host;
use crate::note::Note;
use crate::search::types::*;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Evaluate a single condition against a note.
pub fn evaluate(note: &Note, condition: &Condition) -> bool {
    match condition {
        Condition::Header { presence, name } => presence.accepts(note.has_property(name)),
        Condition::HeaderValue { name, value } => {
            note.has_property(name) && note.property_value_as_string(name) == *value
        }
        Condition::Tag { presence, tag } => presence.accepts(note.has_tag(tag)),
        Condition::Filename { op, pattern } => op.accepts(pattern.is_match(note.name())),
        Condition::Path { op, pattern } => {
            op.accepts(pattern.is_match(&note.path.to_string_lossy()))
        }
    }
}

/// True if every condition passes. Stops at the first failure.
pub fn matches_all(note: &Note, conditions: &[Condition]) -> bool {
    conditions.iter().all(|c| evaluate(note, c))
}

/// Load a note for read-only queries.
///
/// A note whose frontmatter does not parse is treated as having no
/// properties rather than aborting the whole scan.
pub fn load_for_query<H: Host + ?Sized>(host: &H, path: &Path) -> Result<Note> {
    match Note::load(host, path) {
        Ok(note) => Ok(note),
        Err(VaultError::InvalidFrontmatter { message, .. }) => {
            warn!(path = %path.display(), %message, "ignoring unparseable frontmatter");
            Ok(Note::from_parts(
                path,
                host.header_position(path)?,
                Vec::new(),
                host.inline_tags(path)?,
            ))
        }
        Err(e) => Err(e),
    }
}

/// Every visible note, loaded, in host enumeration order.
pub(crate) fn visible_notes<H: Host + ?Sized>(
    host: &H,
    exclusion: &ExclusionFilter,
) -> Result<Vec<Note>> {
    let mut notes = Vec::new();
    for path in host.list_documents()? {
        if exclusion.is_excluded(&path) {
            debug!(path = %path.display(), "excluded");
            continue;
        }
        notes.push(load_for_query(host, &path)?);
    }
    Ok(notes)
}

/// Paths of all non-excluded notes satisfying every condition.
///
/// An empty condition list selects every visible note.
pub fn select_documents<H: Host + ?Sized>(
    host: &H,
    exclusion: &ExclusionFilter,
    conditions: &[Condition],
) -> Result<Vec<PathBuf>> {
    let selected: Vec<PathBuf> = visible_notes(host, exclusion)?
        .into_iter()
        .filter(|note| matches_all(note, conditions))
        .map(|note| note.path)
        .collect();

    debug!(
        conditions = conditions.len(),
        selected = selected.len(),
        "query evaluated"
    );
    Ok(selected)
}
