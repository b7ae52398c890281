//! Vault-wide listings: `properties`, `tags` and `values`.

use crate::cli::args::{PropertiesArgs, TagsArgs, ValuesArgs};
use crate::cli::output::Output;
use crate::cli::{parse_selection, Context};
use crate::error::Result;
use crate::note::Note;
use crate::search::{
    all_property_names, all_tag_names, all_values_of, property_names_of, select_documents,
    tag_counts, TagCount,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PropertiesOutput {
    pub properties: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TagsOutput {
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TagCountsOutput {
    pub tags: Vec<TagCount>,
}

#[derive(Debug, Serialize)]
pub struct ValuesOutput {
    pub property: String,
    pub values: Vec<String>,
}

pub fn properties(ctx: &Context, args: &PropertiesArgs, output: &Output) -> Result<()> {
    let properties = if let Some(note) = &args.note {
        let path = ctx.vault.resolve_note(note)?;
        let note = Note::load(&ctx.vault, &path)?;
        note.property_names().into_iter().map(str::to_string).collect()
    } else if args.selection.is_empty() {
        all_property_names(&ctx.vault, &ctx.exclusion)?
    } else {
        let conditions = parse_selection(&args.selection)?;
        let paths = select_documents(&ctx.vault, &ctx.exclusion, &conditions)?;
        property_names_of(&ctx.vault, &ctx.exclusion, &paths)?
    };

    output.print(&PropertiesOutput { properties })
}

pub fn tags(ctx: &Context, args: &TagsArgs, output: &Output) -> Result<()> {
    if let Some(note) = &args.note {
        let path = ctx.vault.resolve_note(note)?;
        let note = Note::load(&ctx.vault, &path)?;
        return output.print(&TagsOutput { tags: note.tags() });
    }

    if args.with_counts {
        output.print(&TagCountsOutput {
            tags: tag_counts(&ctx.vault, &ctx.exclusion)?,
        })
    } else {
        output.print(&TagsOutput {
            tags: all_tag_names(&ctx.vault, &ctx.exclusion)?,
        })
    }
}

pub fn values(ctx: &Context, args: &ValuesArgs, output: &Output) -> Result<()> {
    let values = all_values_of(&ctx.vault, &ctx.exclusion, &args.name)?;
    output.print(&ValuesOutput {
        property: args.name.clone(),
        values,
    })
}
