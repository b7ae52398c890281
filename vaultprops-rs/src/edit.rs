//! Line-level frontmatter edits.
//!
//! Every operation is a single read-modify-write of one note: take a fresh
//! metadata snapshot, read the raw text, splice lines at the positions the
//! index reported, and write the whole text back. Nothing is re-serialized,
//! so the body and untouched entries keep their exact formatting.
//!
//! Edits that have nothing to do (no frontmatter, missing property, protected
//! name) are not errors. They return [`EditOutcome::Unchanged`] with the
//! reason and leave the note as it was.

use crate::error::{Result, VaultError};
use crate::host::Host;
use crate::note::Note;
use crate::parser::frontmatter::key_separator;
use crate::protected::{EditPath, ProtectedProperties};
use crate::types::HeaderEntry;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

/// Why an edit left the note alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NoHeader,
    MissingProperty,
    AlreadyPresent,
    TargetExists,
    Protected,
    ContainsProtected,
    NothingEmpty,
}

/// Result of a single-note edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum EditOutcome {
    Applied,
    Unchanged(SkipReason),
}

impl EditOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, EditOutcome::Applied)
    }
}

/// Render a frontmatter line the way the editor always writes them.
///
/// Single quotes inside the value are turned into double quotes before the
/// value is wrapped in single quotes. This is lossy: `a'b` is stored as
/// `'a"b'` and reads back as `a"b`.
pub fn format_entry(name: &str, value: &str) -> String {
    format!("{}: '{}'", name, value.replace('\'', "\""))
}

/// Frontmatter editor bound to a host and a protected-name configuration.
pub struct HeaderEditor<'a, H: ?Sized> {
    host: &'a H,
    protected: &'a ProtectedProperties,
}

impl<'a, H: Host + ?Sized> HeaderEditor<'a, H> {
    pub fn new(host: &'a H, protected: &'a ProtectedProperties) -> Self {
        Self { host, protected }
    }

    /// Add `name` as the first frontmatter entry, creating the block if needed.
    ///
    /// Adding a property that already exists does nothing, whatever the value.
    pub fn add_property(&self, path: &Path, name: &str, value: &str) -> Result<EditOutcome> {
        let note = Note::load(self.host, path)?;
        if note.has_property(name) {
            return Ok(skip(path, name, SkipReason::AlreadyPresent));
        }

        let content = self.host.read_text(path)?;
        let line = format_entry(name, value);

        let new_content = match note.header_position() {
            Some(position) => {
                let mut text = TextLines::split(&content);
                text.insert(position.start_line + 1, line)?;
                text.join()
            }
            None => {
                let eol = if uses_crlf(&content) { "\r\n" } else { "\n" };
                format!("---{eol}{line}{eol}---{eol}{content}")
            }
        };

        self.commit(path, "add", name, &new_content)
    }

    /// Rename a property key in place, keeping its value text untouched.
    ///
    /// Only the entry's own line is rewritten; note bodies that happen to
    /// contain `old:` are never affected.
    pub fn rename_property(&self, path: &Path, old: &str, new: &str) -> Result<EditOutcome> {
        let note = Note::load(self.host, path)?;
        let entry = match self.editable_entry(&note, old, EditPath::Standard) {
            Ok(entry) => entry,
            Err(reason) => return Ok(skip(path, old, reason)),
        };
        if note.has_property(new) {
            return Ok(skip(path, new, SkipReason::TargetExists));
        }

        let content = self.host.read_text(path)?;
        let mut text = TextLines::split(&content);
        let current = text.get(entry.line)?;
        let rest = key_separator(current)
            .map(|colon| current[colon..].to_string())
            .ok_or_else(|| stale(path, entry.line))?;
        text.replace(entry.line..=entry.line, format!("{}{}", new, rest))?;

        self.commit(path, "rename", old, &text.join())
    }

    /// Replace a property's value.
    pub fn update_property_value(&self, path: &Path, name: &str, value: &str) -> Result<EditOutcome> {
        self.update_value(path, name, value, EditPath::Standard)
    }

    /// Replace a property's value on behalf of a table view.
    ///
    /// Identical to [`Self::update_property_value`] except that it consults the
    /// table-protected names instead of the fully protected ones.
    pub fn update_table_property_value(
        &self,
        path: &Path,
        name: &str,
        value: &str,
    ) -> Result<EditOutcome> {
        self.update_value(path, name, value, EditPath::Table)
    }

    fn update_value(
        &self,
        path: &Path,
        name: &str,
        value: &str,
        edit_path: EditPath,
    ) -> Result<EditOutcome> {
        let note = Note::load(self.host, path)?;
        let entry = match self.editable_entry(&note, name, edit_path) {
            Ok(entry) => entry,
            Err(reason) => return Ok(skip(path, name, reason)),
        };

        let content = self.host.read_text(path)?;
        let mut text = TextLines::split(&content);
        text.replace(entry.line..=entry.end_line, format_entry(name, value))?;

        self.commit(path, "update", name, &text.join())
    }

    /// Remove a property, including any continuation lines it spans.
    pub fn delete_property(&self, path: &Path, name: &str) -> Result<EditOutcome> {
        let note = Note::load(self.host, path)?;
        let entry = match self.editable_entry(&note, name, EditPath::Standard) {
            Ok(entry) => entry,
            Err(reason) => return Ok(skip(path, name, reason)),
        };

        let content = self.host.read_text(path)?;
        let mut text = TextLines::split(&content);
        text.remove(entry.line..=entry.end_line)?;

        self.commit(path, "delete", name, &text.join())
    }

    /// Remove the whole frontmatter block, fences included.
    ///
    /// Refuses if any property in the block is protected.
    pub fn delete_header_block(&self, path: &Path) -> Result<EditOutcome> {
        let note = Note::load(self.host, path)?;
        let Some(position) = note.header_position() else {
            return Ok(skip(path, "", SkipReason::NoHeader));
        };

        if let Some(name) = note
            .property_names()
            .into_iter()
            .find(|name| self.protected.is_protected(name))
        {
            warn!(
                path = %path.display(),
                property = name,
                "frontmatter contains a protected property; not removing it"
            );
            return Ok(EditOutcome::Unchanged(SkipReason::ContainsProtected));
        }

        let content = self.host.read_text(path)?;
        let mut text = TextLines::split(&content);
        text.remove(position.start_line..=position.end_line)?;

        self.commit(path, "drop-header", "", &text.join())
    }

    /// Delete every property whose value is empty, then drop the block if
    /// nothing is left in it.
    ///
    /// Deletions run one after another, each re-reading the note, so the final
    /// emptiness check always sees the result of every deletion.
    pub fn clear_empty_properties(&self, path: &Path) -> Result<EditOutcome> {
        let note = Note::load(self.host, path)?;
        if !note.has_header() {
            return Ok(skip(path, "", SkipReason::NoHeader));
        }

        let empty: Vec<String> = note
            .entries()
            .iter()
            .filter(|e| e.value.is_empty())
            .map(|e| e.name.clone())
            .collect();

        let mut changed = false;
        for name in &empty {
            changed |= self.delete_property(path, name)?.is_applied();
        }

        let note = Note::load(self.host, path)?;
        if note.has_header() && note.entries().is_empty() {
            changed |= self.delete_header_block(path)?.is_applied();
        }

        if changed {
            Ok(EditOutcome::Applied)
        } else {
            Ok(skip(path, "", SkipReason::NothingEmpty))
        }
    }

    /// Common guard for rename/update/delete.
    fn editable_entry(
        &self,
        note: &Note,
        name: &str,
        edit_path: EditPath,
    ) -> std::result::Result<HeaderEntry, SkipReason> {
        if !note.has_header() {
            return Err(SkipReason::NoHeader);
        }
        let entry = note.entry(name).ok_or(SkipReason::MissingProperty)?;
        if self.protected.blocks(edit_path, name) {
            return Err(SkipReason::Protected);
        }
        Ok(entry.clone())
    }

    fn commit(&self, path: &Path, action: &str, property: &str, content: &str) -> Result<EditOutcome> {
        self.host.write_text(path, content)?;
        info!(path = %path.display(), action, property, "frontmatter updated");
        Ok(EditOutcome::Applied)
    }
}

fn skip(path: &Path, property: &str, reason: SkipReason) -> EditOutcome {
    debug!(path = %path.display(), property, ?reason, "edit skipped");
    EditOutcome::Unchanged(reason)
}

fn stale(path: &Path, line: usize) -> VaultError {
    VaultError::InvalidFrontmatter {
        path: path.to_path_buf(),
        message: format!("line {} does not match the indexed frontmatter", line + 1),
    }
}

/// True if the note's first line ends in CRLF.
fn uses_crlf(content: &str) -> bool {
    content
        .find('\n')
        .is_some_and(|idx| content[..idx].ends_with('\r'))
}

/// A note's text as a line array that remembers its line ending and
/// trailing newline.
///
/// Lines are split on `\n` only, so untouched lines of a CRLF note keep
/// their `\r`. Lines the editor writes get the note's ending.
struct TextLines {
    lines: Vec<String>,
    crlf: bool,
    trailing_newline: bool,
}

impl TextLines {
    fn split(content: &str) -> Self {
        let lines = if content.is_empty() {
            Vec::new()
        } else {
            let text = content.strip_suffix('\n').unwrap_or(content);
            text.split('\n').map(str::to_string).collect()
        };
        Self {
            lines,
            crlf: uses_crlf(content),
            trailing_newline: content.ends_with('\n'),
        }
    }

    /// A line without its ending.
    fn get(&self, idx: usize) -> Result<&str> {
        let line = self
            .lines
            .get(idx)
            .ok_or_else(|| out_of_range(idx, self.lines.len()))?;
        if self.crlf {
            Ok(line.strip_suffix('\r').unwrap_or(line))
        } else {
            Ok(line)
        }
    }

    fn terminate(&self, mut line: String) -> String {
        if self.crlf {
            line.push('\r');
        }
        line
    }

    fn insert(&mut self, idx: usize, line: String) -> Result<()> {
        if idx > self.lines.len() {
            return Err(out_of_range(idx, self.lines.len()));
        }
        let line = self.terminate(line);
        self.lines.insert(idx, line);
        Ok(())
    }

    fn replace(&mut self, range: std::ops::RangeInclusive<usize>, line: String) -> Result<()> {
        self.check(&range)?;
        let line = self.terminate(line);
        self.lines.splice(range, [line]);
        Ok(())
    }

    fn remove(&mut self, range: std::ops::RangeInclusive<usize>) -> Result<()> {
        self.check(&range)?;
        self.lines.drain(range);
        Ok(())
    }

    fn check(&self, range: &std::ops::RangeInclusive<usize>) -> Result<()> {
        if range.start() > range.end() || *range.end() >= self.lines.len() {
            return Err(out_of_range(*range.end(), self.lines.len()));
        }
        Ok(())
    }

    fn join(&self) -> String {
        let mut content = self.lines.join("\n");
        if self.trailing_newline && !self.lines.is_empty() {
            content.push('\n');
        }
        content
    }
}

fn out_of_range(idx: usize, len: usize) -> VaultError {
    VaultError::Other(format!(
        "Line {} is out of range (note has {} lines)",
        idx + 1,
        len
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryVault;
    use pretty_assertions::assert_eq;

    const NOTE: &str = "note.md";

    fn vault(content: &str) -> MemoryVault {
        MemoryVault::with_notes([(NOTE, content)])
    }

    fn path() -> &'static Path {
        Path::new(NOTE)
    }

    fn text(vault: &MemoryVault) -> String {
        vault.get(NOTE).unwrap()
    }

    // ========================================================================
    // add_property
    // ========================================================================

    #[test]
    fn test_add_property_to_existing_header() {
        let vault = vault("---\ntitle: 'T'\n---\nBody\n");
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        let outcome = editor.add_property(path(), "status", "draft").unwrap();
        assert_eq!(outcome, EditOutcome::Applied);
        assert_eq!(text(&vault), "---\nstatus: 'draft'\ntitle: 'T'\n---\nBody\n");
    }

    #[test]
    fn test_add_property_creates_header() {
        let vault = vault("Body only\n");
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        editor.add_property(path(), "status", "").unwrap();
        assert_eq!(text(&vault), "---\nstatus: ''\n---\nBody only\n");

        let note = Note::load(&vault, path()).unwrap();
        assert!(note.has_property("status"));
    }

    #[test]
    fn test_add_property_is_idempotent() {
        let vault = vault("---\ntitle: 'T'\n---\n");
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        editor.add_property(path(), "p", "first").unwrap();
        let outcome = editor.add_property(path(), "p", "second").unwrap();

        assert_eq!(outcome, EditOutcome::Unchanged(SkipReason::AlreadyPresent));
        let note = Note::load(&vault, path()).unwrap();
        assert_eq!(note.property_value_as_string("p"), "first");
    }

    #[test]
    fn test_add_property_escapes_single_quotes() {
        let vault = vault("---\n---\n");
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        editor.add_property(path(), "q", "a'b").unwrap();
        assert!(text(&vault).contains("q: 'a\"b'\n"));

        let note = Note::load(&vault, path()).unwrap();
        assert_eq!(note.property_value_as_string("q"), "a\"b");
    }

    #[test]
    fn test_add_then_delete_round_trip() {
        let original = "---\ntitle: 'T'\n---\nline one\nline two\n";
        let vault = vault(original);
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        editor.add_property(path(), "x", "1").unwrap();
        editor.delete_property(path(), "x").unwrap();

        assert_eq!(text(&vault), original);
        assert!(!Note::load(&vault, path()).unwrap().has_property("x"));
    }

    #[test]
    fn test_add_preserves_missing_trailing_newline() {
        let vault = vault("---\na: '1'\n---\nno newline");
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        editor.add_property(path(), "b", "2").unwrap();
        assert_eq!(text(&vault), "---\nb: '2'\na: '1'\n---\nno newline");
    }

    // ========================================================================
    // rename_property
    // ========================================================================

    #[test]
    fn test_rename_property_keeps_value_text() {
        let vault = vault("---\nold: [a, b]\nother: x\n---\nBody\n");
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        let outcome = editor.rename_property(path(), "old", "new").unwrap();
        assert_eq!(outcome, EditOutcome::Applied);
        assert_eq!(text(&vault), "---\nnew: [a, b]\nother: x\n---\nBody\n");
    }

    #[test]
    fn test_rename_never_touches_body() {
        let vault = vault("---\ntitle: 'T'\n---\ntitle: this is body text\n");
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        editor.rename_property(path(), "title", "name").unwrap();
        assert_eq!(text(&vault), "---\nname: 'T'\n---\ntitle: this is body text\n");
    }

    #[test]
    fn test_rename_skips_when_target_exists() {
        let original = "---\na: '1'\nb: '2'\n---\n";
        let vault = vault(original);
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        let outcome = editor.rename_property(path(), "a", "b").unwrap();
        assert_eq!(outcome, EditOutcome::Unchanged(SkipReason::TargetExists));
        assert_eq!(text(&vault), original);
    }

    #[test]
    fn test_rename_missing_property() {
        let vault = vault("---\na: '1'\n---\n");
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        let outcome = editor.rename_property(path(), "zzz", "b").unwrap();
        assert_eq!(outcome, EditOutcome::Unchanged(SkipReason::MissingProperty));
    }

    // ========================================================================
    // update_property_value
    // ========================================================================

    #[test]
    fn test_update_targets_exact_key() {
        let vault = vault("---\ntags_extra: keep\ntag: old\ntags: [x]\n---\n");
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        editor.update_property_value(path(), "tags", "new").unwrap();
        assert_eq!(text(&vault), "---\ntags_extra: keep\ntag: old\ntags: 'new'\n---\n");
    }

    #[test]
    fn test_update_replaces_whole_block_value() {
        let vault = vault("---\ntags:\n  - a\n  - b\ntitle: T\n---\nBody\n");
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        editor.update_property_value(path(), "tags", "c").unwrap();
        assert_eq!(text(&vault), "---\ntags: 'c'\ntitle: T\n---\nBody\n");
    }

    #[test]
    fn test_update_without_header_is_noop() {
        let vault = vault("plain\n");
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        let outcome = editor.update_property_value(path(), "a", "b").unwrap();
        assert_eq!(outcome, EditOutcome::Unchanged(SkipReason::NoHeader));
        assert_eq!(text(&vault), "plain\n");
    }

    #[test]
    fn test_table_update_uses_table_protection() {
        let original = "---\nstatus: 'open'\nuid: '7'\n---\n";
        let vault = vault(original);
        let protected = ProtectedProperties::new(["uid"], ["status"]);
        let editor = HeaderEditor::new(&vault, &protected);

        let blocked = editor
            .update_table_property_value(path(), "status", "done")
            .unwrap();
        assert_eq!(blocked, EditOutcome::Unchanged(SkipReason::Protected));
        assert_eq!(text(&vault), original);

        // Only the table set is consulted on this path.
        editor.update_table_property_value(path(), "uid", "8").unwrap();
        assert!(text(&vault).contains("uid: '8'"));

        editor.update_property_value(path(), "status", "done").unwrap();
        assert!(text(&vault).contains("status: 'done'"));
    }

    // ========================================================================
    // protection
    // ========================================================================

    #[test]
    fn test_protected_property_is_untouchable() {
        let original = "---\nuid: '42'\ntitle: 'T'\n---\nBody\n";
        let vault = vault(original);
        let protected = ProtectedProperties::from_lines("uid", "");
        let editor = HeaderEditor::new(&vault, &protected);

        let outcomes = [
            editor.rename_property(path(), "uid", "id").unwrap(),
            editor.update_property_value(path(), "uid", "43").unwrap(),
            editor.delete_property(path(), "uid").unwrap(),
            editor.delete_header_block(path()).unwrap(),
        ];

        assert_eq!(outcomes[0], EditOutcome::Unchanged(SkipReason::Protected));
        assert_eq!(outcomes[1], EditOutcome::Unchanged(SkipReason::Protected));
        assert_eq!(outcomes[2], EditOutcome::Unchanged(SkipReason::Protected));
        assert_eq!(outcomes[3], EditOutcome::Unchanged(SkipReason::ContainsProtected));
        assert_eq!(text(&vault), original);
    }

    // ========================================================================
    // delete_property / delete_header_block
    // ========================================================================

    #[test]
    fn test_delete_block_sequence_property() {
        let vault = vault("---\ntitle: T\naliases:\n  - one\n  - two\n---\nBody\n");
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        editor.delete_property(path(), "aliases").unwrap();
        assert_eq!(text(&vault), "---\ntitle: T\n---\nBody\n");
    }

    #[test]
    fn test_delete_header_block() {
        let vault = vault("---\na: '1'\nb: '2'\n---\nBody\nmore\n");
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        let outcome = editor.delete_header_block(path()).unwrap();
        assert_eq!(outcome, EditOutcome::Applied);
        assert_eq!(text(&vault), "Body\nmore\n");
    }

    #[test]
    fn test_delete_header_block_without_header() {
        let vault = vault("Body\n");
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        let outcome = editor.delete_header_block(path()).unwrap();
        assert_eq!(outcome, EditOutcome::Unchanged(SkipReason::NoHeader));
    }

    // ========================================================================
    // clear_empty_properties
    // ========================================================================

    #[test]
    fn test_clear_empty_keeps_non_empty() {
        let vault = vault("---\na: ''\nb: 'x'\nc:\n---\nBody\n");
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        let outcome = editor.clear_empty_properties(path()).unwrap();
        assert_eq!(outcome, EditOutcome::Applied);
        assert_eq!(text(&vault), "---\nb: 'x'\n---\nBody\n");
    }

    #[test]
    fn test_clear_empty_removes_emptied_header() {
        let vault = vault("---\na: ''\n---\nBody\n");
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        editor.clear_empty_properties(path()).unwrap();
        assert_eq!(text(&vault), "Body\n");
        assert!(!Note::load(&vault, path()).unwrap().has_header());
    }

    #[test]
    fn test_clear_empty_respects_protection() {
        let original = "---\nuid: ''\n---\nBody\n";
        let vault = vault(original);
        let protected = ProtectedProperties::new(["uid"], Vec::<String>::new());
        let editor = HeaderEditor::new(&vault, &protected);

        let outcome = editor.clear_empty_properties(path()).unwrap();
        assert_eq!(outcome, EditOutcome::Unchanged(SkipReason::NothingEmpty));
        assert_eq!(text(&vault), original);
    }

    #[test]
    fn test_clear_empty_nothing_to_do() {
        let vault = vault("---\na: 'x'\n---\n");
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        let outcome = editor.clear_empty_properties(path()).unwrap();
        assert_eq!(outcome, EditOutcome::Unchanged(SkipReason::NothingEmpty));
    }

    #[test]
    fn test_clear_empty_keeps_non_string_keys() {
        let original = "---\n2024: important\ntrue: kept\ntitle: x\n---\nBody\n";
        let vault = vault(original);
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        let note = Note::load(&vault, path()).unwrap();
        assert_eq!(note.property_value_as_string("2024"), "important");
        assert_eq!(note.property_value_as_string("true"), "kept");

        let outcome = editor.clear_empty_properties(path()).unwrap();
        assert_eq!(outcome, EditOutcome::Unchanged(SkipReason::NothingEmpty));
        assert_eq!(text(&vault), original);
    }

    // ========================================================================
    // line endings and quoted keys
    // ========================================================================

    #[test]
    fn test_crlf_note_keeps_line_endings() {
        let vault = vault("---\r\na: '1'\r\n---\r\nline one\r\nline two\r\n");
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        editor.update_property_value(path(), "a", "2").unwrap();
        assert_eq!(text(&vault), "---\r\na: '2'\r\n---\r\nline one\r\nline two\r\n");

        editor.add_property(path(), "b", "3").unwrap();
        editor.rename_property(path(), "a", "c").unwrap();
        assert_eq!(
            text(&vault),
            "---\r\nb: '3'\r\nc: '2'\r\n---\r\nline one\r\nline two\r\n"
        );

        editor.delete_header_block(path()).unwrap();
        assert_eq!(text(&vault), "line one\r\nline two\r\n");
    }

    #[test]
    fn test_add_header_to_crlf_note() {
        let vault = vault("Body\r\nmore\r\n");
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        editor.add_property(path(), "status", "new").unwrap();
        assert_eq!(text(&vault), "---\r\nstatus: 'new'\r\n---\r\nBody\r\nmore\r\n");
        assert!(Note::load(&vault, path()).unwrap().has_property("status"));
    }

    #[test]
    fn test_rename_quoted_key_with_colon() {
        let vault = vault("---\n\"a:b\": 1\nother: x\n---\n");
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        let outcome = editor.rename_property(path(), "a:b", "ab").unwrap();
        assert_eq!(outcome, EditOutcome::Applied);
        assert_eq!(text(&vault), "---\nab: 1\nother: x\n---\n");
    }

    // ========================================================================
    // host failures
    // ========================================================================

    #[test]
    fn test_write_failure_propagates() {
        let vault = vault("---\na: '1'\n---\n");
        vault.set_read_only(true);
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        let result = editor.update_property_value(path(), "a", "2");
        assert!(matches!(result, Err(VaultError::Io(_))));
    }

    #[test]
    fn test_missing_note_is_an_error() {
        let vault = MemoryVault::new();
        let protected = ProtectedProperties::default();
        let editor = HeaderEditor::new(&vault, &protected);

        let result = editor.add_property(Path::new("ghost.md"), "a", "b");
        assert!(matches!(result, Err(VaultError::NoteNotFound(_))));
    }

    #[test]
    fn test_outcome_serialization() {
        let applied = serde_json::to_value(EditOutcome::Applied).unwrap();
        assert_eq!(applied, serde_json::json!({ "status": "applied" }));

        let skipped = serde_json::to_value(EditOutcome::Unchanged(SkipReason::Protected)).unwrap();
        assert_eq!(
            skipped,
            serde_json::json!({ "status": "unchanged", "reason": "protected" })
        );
    }
}
