//! The `get` command.

use crate::cli::args::GetArgs;
use crate::cli::output::Output;
use crate::cli::Context;
use crate::error::Result;
use crate::note::Note;
use crate::types::HeaderPosition;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HeaderView {
    pub path: String,
    pub has_header: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<HeaderPosition>,
    pub tags: Vec<String>,
    pub properties: Vec<PropertyView>,
}

#[derive(Debug, Serialize)]
pub struct PropertyView {
    pub name: String,
    pub value: String,
    /// 1-indexed line of the key.
    pub line: usize,
}

#[derive(Debug, Serialize)]
pub struct SinglePropertyView {
    pub path: String,
    pub name: String,
    pub present: bool,
    pub value: String,
}

pub fn run(ctx: &Context, args: &GetArgs, output: &Output) -> Result<()> {
    let path = ctx.vault.resolve_note(&args.note)?;
    let note = Note::load(&ctx.vault, &path)?;
    let path = path.to_string_lossy().to_string();

    if let Some(name) = &args.name {
        return output.print(&SinglePropertyView {
            path,
            name: name.clone(),
            present: note.has_property(name),
            value: note.property_value_as_string(name),
        });
    }

    let properties = note
        .entries()
        .iter()
        .map(|e| PropertyView {
            name: e.name.clone(),
            value: e.value.as_display_string(),
            line: e.line + 1,
        })
        .collect();

    output.print(&HeaderView {
        path,
        has_header: note.has_header(),
        position: note.header_position(),
        tags: note.tags(),
        properties,
    })
}
