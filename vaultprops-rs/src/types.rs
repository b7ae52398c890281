//! Shared types for vaultprops.

use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;

/// Location of a note's frontmatter block.
///
/// Both lines are 0-indexed and point at the opening and closing `---` fences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderPosition {
    pub start_line: usize,
    pub end_line: usize,
}

/// A frontmatter value, reduced to the shapes the editor understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// `key:` with nothing after it, or an explicit null.
    Empty,
    Scalar(String),
    List(Vec<String>),
}

impl PropertyValue {
    /// Convert a parsed YAML value.
    ///
    /// Booleans and numbers keep their YAML spelling; nested mappings are
    /// flattened to their YAML text since they are not editable anyway.
    pub fn from_yaml(value: &YamlValue) -> Self {
        match value {
            YamlValue::Null => PropertyValue::Empty,
            YamlValue::Sequence(items) => {
                PropertyValue::List(items.iter().map(scalar_to_string).collect())
            }
            YamlValue::Tagged(tagged) => PropertyValue::from_yaml(&tagged.value),
            other => PropertyValue::Scalar(scalar_to_string(other)),
        }
    }

    /// Render as a single string: lists are comma-joined, empty renders as "".
    pub fn as_display_string(&self) -> String {
        match self {
            PropertyValue::Empty => String::new(),
            PropertyValue::Scalar(s) => s.clone(),
            PropertyValue::List(items) => items.join(","),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_display_string().is_empty()
    }
}

/// Text form of a YAML scalar, as used for both values and keys.
pub(crate) fn scalar_to_string(value: &YamlValue) -> String {
    match value {
        YamlValue::Null => String::new(),
        YamlValue::String(s) => s.clone(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Sequence(items) => items
            .iter()
            .map(scalar_to_string)
            .collect::<Vec<_>>()
            .join(","),
        YamlValue::Tagged(tagged) => scalar_to_string(&tagged.value),
        YamlValue::Mapping(_) => serde_yaml::to_string(value)
            .unwrap_or_default()
            .trim()
            .to_string(),
    }
}

/// One top-level frontmatter entry together with its source span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    pub name: String,
    pub value: PropertyValue,
    /// 0-indexed line holding `name:`.
    pub line: usize,
    /// Last line belonging to this entry (indented continuation lines).
    pub end_line: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> YamlValue {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn test_list_joins_without_spaces() {
        let value = PropertyValue::from_yaml(&yaml("[a, b, c]"));
        assert_eq!(value, PropertyValue::List(vec!["a".into(), "b".into(), "c".into()]));
        assert_eq!(value.as_display_string(), "a,b,c");
    }

    #[test]
    fn test_scalars_keep_yaml_spelling() {
        assert_eq!(PropertyValue::from_yaml(&yaml("true")).as_display_string(), "true");
        assert_eq!(PropertyValue::from_yaml(&yaml("42")).as_display_string(), "42");
        assert_eq!(PropertyValue::from_yaml(&yaml("1.5")).as_display_string(), "1.5");
    }

    #[test]
    fn test_key_text() {
        assert_eq!(scalar_to_string(&yaml("2024")), "2024");
        assert_eq!(scalar_to_string(&yaml("true")), "true");
        assert_eq!(scalar_to_string(&yaml("'quoted'")), "quoted");
    }

    #[test]
    fn test_null_is_empty() {
        let value = PropertyValue::from_yaml(&YamlValue::Null);
        assert_eq!(value, PropertyValue::Empty);
        assert!(value.is_empty());
        assert!(PropertyValue::Scalar(String::new()).is_empty());
        assert!(PropertyValue::List(vec![]).is_empty());
    }
}
