//! CLI command implementations.

pub mod args;
pub mod output;

pub mod edit;
pub mod get;
pub mod listing;
pub mod select;

pub use args::{Cli, Commands};
pub use output::Output;

use crate::cli::args::{SelectionArgs, TargetArgs};
use crate::config::Config;
use crate::error::{Result, VaultError};
use crate::exclusion::ExclusionFilter;
use crate::protected::ProtectedProperties;
use crate::search::{parse_conditions, parse_conditions_json, select_documents, Condition};
use crate::vault::Vault;
use std::path::{Path, PathBuf};

/// Everything a command needs, resolved once per invocation.
pub struct Context {
    pub vault: Vault,
    pub protected: ProtectedProperties,
    pub exclusion: ExclusionFilter,
}

impl Context {
    pub fn new(config: &Config, cli_vault: Option<&Path>) -> Result<Self> {
        let vault = Vault::new(config.resolve_vault_path(cli_vault)?)?;
        Ok(Self {
            vault,
            protected: config.protected(),
            exclusion: config.exclusion(),
        })
    }

    /// Notes an edit command should touch.
    ///
    /// `--note` names one note directly, bypassing exclusion. Otherwise the
    /// conditions (or `--all`) select from the visible notes.
    pub fn targets(&self, target: &TargetArgs) -> Result<Vec<PathBuf>> {
        if let Some(note) = &target.note {
            return Ok(vec![self.vault.resolve_note(note)?]);
        }
        if target.selection.is_empty() && !target.all {
            return Err(VaultError::Other(
                "No notes targeted; pass --note, --where, --conditions or --all".to_string(),
            ));
        }
        let conditions = parse_selection(&target.selection)?;
        select_documents(&self.vault, &self.exclusion, &conditions)
    }
}

/// Parse `--where` tuples followed by `--conditions` JSON into one list.
pub fn parse_selection(selection: &SelectionArgs) -> Result<Vec<Condition>> {
    let mut conditions = parse_conditions(&selection.where_tuples())?;
    if let Some(json) = &selection.conditions_json {
        conditions.extend(parse_conditions_json(json)?);
    }
    Ok(conditions)
}
