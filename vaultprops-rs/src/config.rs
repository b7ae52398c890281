//! Configuration file support.
//!
//! ```toml
//! vault = "~/Notes"
//! protected = ["uid", "created"]
//! protected_in_table = "status\npriority"
//! excluded_prefixes = ["templates/", "archive/"]
//! ```
//!
//! The name lists accept either a TOML array or one newline-delimited string.

use crate::error::{Result, VaultError};
use crate::exclusion::ExclusionFilter;
use crate::protected::ProtectedProperties;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable pointing at a config file.
pub const CONFIG_ENV: &str = "VAULTPROPS_CONFIG";

const CONFIG_DIR: &str = "vaultprops";
const CONFIG_FILENAME: &str = "config.toml";

/// A list of names written either as an array or as newline-delimited text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameList {
    Lines(String),
    Items(Vec<String>),
}

impl Default for NameList {
    fn default() -> Self {
        NameList::Items(Vec::new())
    }
}

impl NameList {
    /// Trimmed, non-blank names.
    pub fn names(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            NameList::Lines(text) => text.lines().collect(),
            NameList::Items(items) => items.iter().map(String::as_str).collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Settings shared by every command in one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Vault used when `--vault` is not given.
    pub vault: Option<PathBuf>,
    /// Properties no edit may rename, update or delete.
    pub protected: NameList,
    /// Properties table-view updates may not change.
    pub protected_in_table: NameList,
    /// Path prefixes hidden from queries and listings.
    pub excluded_prefixes: NameList,
}

impl Config {
    /// `<config_dir>/vaultprops/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
    }

    /// Load configuration.
    ///
    /// An explicit path (or `VAULTPROPS_CONFIG`) must exist. The default
    /// location is optional; without it every setting takes its default.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Self::from_file(Path::new(&path));
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("no config file found; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse a specific config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            VaultError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::parse(&content)
            .map_err(|e| VaultError::ConfigError(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Pick the vault root: the CLI flag wins over the configured one.
    ///
    /// A leading `~/` is expanded to the home directory.
    pub fn resolve_vault_path(&self, cli_vault: Option<&Path>) -> Result<PathBuf> {
        let path = cli_vault
            .map(Path::to_path_buf)
            .or_else(|| self.vault.clone())
            .ok_or(VaultError::NoVaultConfigured)?;
        Ok(expand_home(&path))
    }

    pub fn protected(&self) -> ProtectedProperties {
        ProtectedProperties::new(self.protected.names(), self.protected_in_table.names())
    }

    pub fn exclusion(&self) -> ExclusionFilter {
        ExclusionFilter::new(self.excluded_prefixes.names())
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
