//! The `select` command.

use crate::cli::args::SelectArgs;
use crate::cli::output::Output;
use crate::cli::{parse_selection, Context};
use crate::error::Result;
use crate::note::NoteInfo;
use crate::search::{select_documents, SelectResult};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DetailedSelectResult {
    pub count: usize,
    pub notes: Vec<NoteInfo>,
}

pub fn run(ctx: &Context, args: &SelectArgs, output: &Output) -> Result<()> {
    let conditions = parse_selection(&args.selection)?;
    let paths = select_documents(&ctx.vault, &ctx.exclusion, &conditions)?;

    if args.details {
        let notes = paths
            .iter()
            .map(|p| NoteInfo::from_path(&ctx.vault.root, p))
            .collect::<Result<Vec<_>>>()?;
        output.print(&DetailedSelectResult {
            count: notes.len(),
            notes,
        })
    } else {
        output.print(&SelectResult::new(paths))
    }
}
