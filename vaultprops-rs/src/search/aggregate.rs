//! Vault-wide listings of property names, tags and values.
//!
//! All listings skip excluded notes and report each item once, in the order
//! it was first seen while walking the host's enumeration.

use crate::error::Result;
use crate::exclusion::ExclusionFilter;
use crate::host::Host;
use crate::search::matcher::{load_for_query, visible_notes};
use crate::search::types::TagCount;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// Distinct frontmatter keys across the vault.
pub fn all_property_names<H: Host + ?Sized>(
    host: &H,
    exclusion: &ExclusionFilter,
) -> Result<Vec<String>> {
    let mut names = Distinct::default();
    for note in visible_notes(host, exclusion)? {
        names.extend(note.property_names().into_iter().map(str::to_string));
    }
    Ok(names.into_vec())
}

/// Distinct frontmatter keys across a subset of notes, such as a query result.
pub fn property_names_of<H: Host + ?Sized>(
    host: &H,
    exclusion: &ExclusionFilter,
    paths: &[PathBuf],
) -> Result<Vec<String>> {
    let mut names = Distinct::default();
    for path in paths.iter().filter(|p| !exclusion.is_excluded(p)) {
        let note = load_for_query(host, path)?;
        names.extend(note.property_names().into_iter().map(str::to_string));
    }
    Ok(names.into_vec())
}

/// Distinct normalized tags across the vault.
pub fn all_tag_names<H: Host + ?Sized>(
    host: &H,
    exclusion: &ExclusionFilter,
) -> Result<Vec<String>> {
    let mut tags = Distinct::default();
    for note in visible_notes(host, exclusion)? {
        tags.extend(note.tags());
    }
    Ok(tags.into_vec())
}

/// Distinct rendered values of one property.
///
/// Notes without the property contribute `""`, the same as an empty value.
pub fn all_values_of<H: Host + ?Sized>(
    host: &H,
    exclusion: &ExclusionFilter,
    name: &str,
) -> Result<Vec<String>> {
    let mut values = Distinct::default();
    for note in visible_notes(host, exclusion)? {
        values.extend([note.property_value_as_string(name)]);
    }
    Ok(values.into_vec())
}

/// Number of notes carrying each tag, most used first, then by name.
pub fn tag_counts<H: Host + ?Sized>(
    host: &H,
    exclusion: &ExclusionFilter,
) -> Result<Vec<TagCount>> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for note in visible_notes(host, exclusion)? {
        for tag in note.tags() {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }

    let mut counts: Vec<TagCount> = counts
        .into_iter()
        .map(|(name, count)| TagCount { name, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    Ok(counts)
}

/// Insertion-ordered set.
#[derive(Default)]
struct Distinct {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl Distinct {
    fn extend(&mut self, items: impl IntoIterator<Item = String>) {
        for item in items {
            if self.seen.insert(item.clone()) {
                self.items.push(item);
            }
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.items
    }
}
