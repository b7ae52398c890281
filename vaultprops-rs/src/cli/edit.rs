//! Frontmatter edit commands: `add`, `rename`, `set`, `remove`,
//! `drop-header` and `clear-empty`.
//!
//! Each command runs the same edit over every targeted note, one note at a
//! time, and prints a per-note report. With `--dry-run` the edit runs against
//! an in-memory copy of the note and the report carries the would-be content.

use crate::cli::args::{AddArgs, RemoveArgs, RenameArgs, SetArgs, TargetArgs};
use crate::cli::output::Output;
use crate::cli::Context;
use crate::edit::{EditOutcome, HeaderEditor};
use crate::error::Result;
use crate::host::{DocumentStore, Host};
use crate::memory::MemoryVault;
use serde::Serialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct EditReport {
    pub action: &'static str,
    pub dry_run: bool,
    pub applied: usize,
    pub unchanged: usize,
    pub notes: Vec<NoteEdit>,
}

#[derive(Debug, Serialize)]
pub struct NoteEdit {
    pub path: String,
    #[serde(flatten)]
    pub outcome: EditOutcome,
    /// Content the note would have after the edit (dry runs only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

type Editor<'a> = HeaderEditor<'a, dyn Host>;

pub fn add(ctx: &Context, args: &AddArgs, output: &Output) -> Result<()> {
    run_edit(ctx, &args.target, "add", output, |editor, path| {
        editor.add_property(path, &args.name, &args.value)
    })
}

pub fn rename(ctx: &Context, args: &RenameArgs, output: &Output) -> Result<()> {
    run_edit(ctx, &args.target, "rename", output, |editor, path| {
        editor.rename_property(path, &args.old, &args.new)
    })
}

pub fn set(ctx: &Context, args: &SetArgs, output: &Output) -> Result<()> {
    run_edit(ctx, &args.target, "set", output, |editor, path| {
        if args.table {
            editor.update_table_property_value(path, &args.name, &args.value)
        } else {
            editor.update_property_value(path, &args.name, &args.value)
        }
    })
}

pub fn remove(ctx: &Context, args: &RemoveArgs, output: &Output) -> Result<()> {
    run_edit(ctx, &args.target, "remove", output, |editor, path| {
        editor.delete_property(path, &args.name)
    })
}

pub fn drop_header(ctx: &Context, args: &TargetArgs, output: &Output) -> Result<()> {
    run_edit(ctx, args, "drop-header", output, |editor, path| {
        editor.delete_header_block(path)
    })
}

pub fn clear_empty(ctx: &Context, args: &TargetArgs, output: &Output) -> Result<()> {
    run_edit(ctx, args, "clear-empty", output, |editor, path| {
        editor.clear_empty_properties(path)
    })
}

fn run_edit<F>(
    ctx: &Context,
    target: &TargetArgs,
    action: &'static str,
    output: &Output,
    edit: F,
) -> Result<()>
where
    F: Fn(&Editor<'_>, &Path) -> Result<EditOutcome>,
{
    let paths = ctx.targets(target)?;
    info!(action, targets = paths.len(), dry_run = target.dry_run, "running edit");

    let live = Editor::new(&ctx.vault, &ctx.protected);
    let mut notes = Vec::with_capacity(paths.len());

    for path in &paths {
        let (outcome, content) = if target.dry_run {
            preview(ctx, path, &edit)?
        } else {
            (edit(&live, path)?, None)
        };
        notes.push(NoteEdit {
            path: path.to_string_lossy().to_string(),
            outcome,
            content,
        });
    }

    let applied = notes.iter().filter(|n| n.outcome.is_applied()).count();
    let report = EditReport {
        action,
        dry_run: target.dry_run,
        applied,
        unchanged: notes.len() - applied,
        notes,
    };

    output.print(&report)?;
    if !target.dry_run {
        output.info(&format!("{}: {} of {} notes changed", action, applied, paths.len()));
    }
    Ok(())
}

/// Run the edit on a scratch copy of one note.
fn preview<F>(ctx: &Context, path: &Path, edit: &F) -> Result<(EditOutcome, Option<String>)>
where
    F: Fn(&Editor<'_>, &Path) -> Result<EditOutcome>,
{
    let scratch = MemoryVault::with_notes([(path.to_path_buf(), ctx.vault.read_text(path)?)]);
    let editor = Editor::new(&scratch, &ctx.protected);
    let outcome = edit(&editor, path)?;
    let content = if outcome.is_applied() {
        scratch.get(path)
    } else {
        None
    };
    Ok((outcome, content))
}
