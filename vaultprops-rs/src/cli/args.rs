//! CLI argument definitions using clap.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vaultprops")]
#[command(author, version, about = "Edit and query frontmatter properties in an Obsidian-style vault", long_about = None)]
pub struct Cli {
    /// Path to the vault (overrides config default)
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,

    /// Config file (default: $VAULTPROPS_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output as JSON (default)
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Json
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List notes matching every condition
    Select(SelectArgs),

    /// List property names across the vault, a selection, or one note
    Properties(PropertiesArgs),

    /// List tags across the vault or in one note
    Tags(TagsArgs),

    /// List the distinct values of a property
    Values(ValuesArgs),

    /// Show a note's frontmatter, or one property of it
    Get(GetArgs),

    /// Add a property as the first frontmatter entry
    Add(AddArgs),

    /// Rename a property key
    Rename(RenameArgs),

    /// Replace a property's value
    Set(SetArgs),

    /// Remove a property
    Remove(RemoveArgs),

    /// Remove the whole frontmatter block
    #[command(name = "drop-header")]
    DropHeader(TargetArgs),

    /// Remove empty properties, and the block if it ends up empty
    #[command(name = "clear-empty")]
    ClearEmpty(TargetArgs),
}

// === Selection ===

/// Conditions shared by queries and batch edits.
#[derive(Args, Debug, Default, Clone)]
pub struct SelectionArgs {
    /// Condition as KIND OP OPERAND, e.g. `--where tag includes work` (repeatable)
    #[arg(
        long = "where",
        num_args = 3,
        value_names = ["KIND", "OP", "OPERAND"],
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub conditions: Vec<String>,

    /// Conditions as JSON, e.g. '[["标签","包含","w"]]'
    #[arg(long = "conditions", value_name = "JSON")]
    pub conditions_json: Option<String>,
}

impl SelectionArgs {
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.conditions_json.is_none()
    }

    /// `--where` values regrouped into `[kind, op, operand]` tuples.
    pub fn where_tuples(&self) -> Vec<Vec<String>> {
        self.conditions.chunks(3).map(<[String]>::to_vec).collect()
    }
}

#[derive(Parser, Debug)]
pub struct SelectArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Include modification time and size for each note
    #[arg(long)]
    pub details: bool,
}

/// Which notes an edit applies to.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// A single note (path, name or alias)
    #[arg(long, conflicts_with_all = ["conditions", "conditions_json", "all"])]
    pub note: Option<String>,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Every note not excluded by configuration
    #[arg(long)]
    pub all: bool,

    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,
}

// === Listings ===

#[derive(Parser, Debug)]
pub struct PropertiesArgs {
    /// Only this note
    #[arg(long, conflicts_with_all = ["conditions", "conditions_json"])]
    pub note: Option<String>,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Only this note
    #[arg(long, conflicts_with = "with_counts")]
    pub note: Option<String>,

    /// Include the number of notes carrying each tag
    #[arg(long)]
    pub with_counts: bool,
}

#[derive(Parser, Debug)]
pub struct ValuesArgs {
    /// Property name
    pub name: String,
}

#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Path, name or alias of the note
    pub note: String,

    /// Only this property
    pub name: Option<String>,
}

// === Edits ===

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Property name
    pub name: String,

    /// Initial value
    #[arg(default_value = "")]
    pub value: String,

    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Parser, Debug)]
pub struct RenameArgs {
    /// Current property name
    pub old: String,

    /// New property name
    pub new: String,

    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Parser, Debug)]
pub struct SetArgs {
    /// Property name
    pub name: String,

    /// New value
    pub value: String,

    /// Edit as a table view would (checks table-protected names instead)
    #[arg(long)]
    pub table: bool,

    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Property name
    pub name: String,

    #[command(flatten)]
    pub target: TargetArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_where_groups_into_tuples() {
        let cli = Cli::parse_from([
            "vaultprops",
            "select",
            "--where",
            "tag",
            "includes",
            "w",
            "--where",
            "path",
            "matches",
            "^n/",
        ]);
        let Commands::Select(args) = cli.command else {
            panic!("expected select");
        };
        assert_eq!(
            args.selection.where_tuples(),
            vec![
                vec!["tag".to_string(), "includes".to_string(), "w".to_string()],
                vec!["path".to_string(), "matches".to_string(), "^n/".to_string()],
            ]
        );
    }

    #[test]
    fn test_note_conflicts_with_selection() {
        let result = Cli::try_parse_from([
            "vaultprops",
            "remove",
            "status",
            "--note",
            "a",
            "--all",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format() {
        let cli = Cli::parse_from(["vaultprops", "--yaml", "tags"]);
        assert_eq!(cli.output_format(), OutputFormat::Yaml);
        let cli = Cli::parse_from(["vaultprops", "tags"]);
        assert_eq!(cli.output_format(), OutputFormat::Json);
    }
}
