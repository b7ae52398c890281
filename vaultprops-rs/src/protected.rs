//! Property names that edits must leave alone.

use std::collections::BTreeSet;

/// Which edit path is asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPath {
    /// Rename, update, delete and whole-header removal.
    Standard,
    /// Cell edits coming from a property table view.
    Table,
}

/// The two protected-name sets, fixed for the duration of an edit batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtectedProperties {
    protected: BTreeSet<String>,
    protected_in_table: BTreeSet<String>,
}

impl ProtectedProperties {
    pub fn new<I, J, S, T>(protected: I, protected_in_table: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Self {
            protected: collect_names(protected),
            protected_in_table: collect_names(protected_in_table),
        }
    }

    /// Build from two newline-delimited lists.
    pub fn from_lines(protected: &str, protected_in_table: &str) -> Self {
        Self::new(protected.lines(), protected_in_table.lines())
    }

    pub fn is_protected(&self, name: &str) -> bool {
        self.protected.contains(name)
    }

    pub fn is_protected_in_table(&self, name: &str) -> bool {
        self.protected_in_table.contains(name)
    }

    /// Whether `name` is protected for the given edit path.
    pub fn blocks(&self, path: EditPath, name: &str) -> bool {
        match path {
            EditPath::Standard => self.is_protected(name),
            EditPath::Table => self.is_protected_in_table(name),
        }
    }
}

fn collect_names<I, S>(names: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|n| n.as_ref().trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}
