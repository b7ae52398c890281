//! Error types and exit codes for vaultprops.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes used by the CLI.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOTE_NOT_FOUND: i32 = 2;
    pub const INVALID_FRONTMATTER: i32 = 5;
    pub const INVALID_QUERY: i32 = 6;
}

/// Main error type for vaultprops operations.
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Note not found: {0}")]
    NoteNotFound(PathBuf),

    #[error("Note has no frontmatter: {0}")]
    NoHeader(PathBuf),

    #[error("Invalid frontmatter in {path}: {message}")]
    InvalidFrontmatter { path: PathBuf, message: String },

    #[error("Vault not found at: {0}")]
    VaultNotFound(PathBuf),

    #[error("No vault configured; pass --vault or set `vault` in the config file")]
    NoVaultConfigured,

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Invalid condition {condition:?}: {message}")]
    InvalidCondition {
        condition: Vec<String>,
        message: String,
    },

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("{0}")]
    Other(String),
}

impl VaultError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            VaultError::NoteNotFound(_) => exit_code::NOTE_NOT_FOUND,
            VaultError::NoHeader(_) | VaultError::InvalidFrontmatter { .. } => {
                exit_code::INVALID_FRONTMATTER
            }
            VaultError::InvalidCondition { .. } | VaultError::InvalidPattern { .. } => {
                exit_code::INVALID_QUERY
            }
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for vaultprops operations.
pub type Result<T> = std::result::Result<T, VaultError>;
