//! vaultprops - frontmatter property editing and querying for Obsidian-style vaults.
//!
//! # Overview
//!
//! - Line-level frontmatter edits that leave the rest of a note untouched
//!   (add, rename, update, delete, drop the whole block, clear empties)
//! - Protected property names that edits refuse to touch
//! - Conjunctive queries over properties, tags, file names and paths
//! - Vault-wide listings of property names, tags and values
//!
//! The engine talks to its surroundings through the [`host`] traits, so it
//! runs the same over a directory ([`Vault`]) or in memory ([`MemoryVault`]).
//!
//! # Example
//!
//! ```no_run
//! use vaultprops::{ExclusionFilter, HeaderEditor, ProtectedProperties, Vault};
//! use vaultprops::search::{parse_conditions_json, select_documents};
//!
//! let vault = Vault::new("/path/to/vault").unwrap();
//! let protected = ProtectedProperties::from_lines("uid", "");
//!
//! let conditions = parse_conditions_json(r#"[["tag","includes","draft"]]"#).unwrap();
//! let editor = HeaderEditor::new(&vault, &protected);
//! for path in select_documents(&vault, &ExclusionFilter::default(), &conditions).unwrap() {
//!     editor.add_property(&path, "status", "draft").unwrap();
//! }
//! ```

pub mod cli;
pub mod config;
pub mod edit;
pub mod error;
pub mod exclusion;
pub mod host;
pub mod memory;
pub mod note;
pub mod parser;
pub mod protected;
pub mod search;
pub mod tags;
pub mod types;
pub mod vault;

// Re-export main types at crate root
pub use config::Config;
pub use edit::{EditOutcome, HeaderEditor, SkipReason};
pub use error::{Result, VaultError};
pub use exclusion::ExclusionFilter;
pub use host::{DocumentStore, Host, MetadataIndex};
pub use memory::MemoryVault;
pub use note::Note;
pub use protected::{EditPath, ProtectedProperties};
pub use types::*;
pub use vault::Vault;
