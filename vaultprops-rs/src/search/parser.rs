//! Parsing of positional condition tuples.
//!
//! A condition is written as `[kind, operator, operand]`:
//!
//! ```text
//! kind        operator                       operand
//! yaml        包含 | 不包含                   property name
//! yaml属性     <property name>                 value (implicit equality)
//! 标签         包含 | 不包含                   tag
//! 文件名称     符合 | 不符合                   regex over the file stem
//! 文件路径     符合 | 不符合                   regex over the full path
//! ```
//!
//! English aliases are accepted for every kind and operator: `header`,
//! `property`, `tag`, `filename`, `path`; `includes`, `excludes`, `matches`,
//! `not-matches` (or `notMatches`).

use crate::error::{Result, VaultError};
use crate::search::types::*;
use regex::Regex;

/// Parse one `[kind, operator, operand]` tuple.
pub fn parse_condition<S: AsRef<str>>(parts: &[S]) -> Result<Condition> {
    let [kind, op, operand] = parts else {
        return Err(invalid(
            parts,
            format!("expected [kind, operator, operand], got {} items", parts.len()),
        ));
    };
    let (kind, op, operand) = (kind.as_ref(), op.as_ref(), operand.as_ref());

    match kind {
        "yaml" | "header" => Ok(Condition::Header {
            presence: presence(parts, op)?,
            name: operand.to_string(),
        }),
        "yaml属性" | "property" => Ok(Condition::HeaderValue {
            name: op.to_string(),
            value: operand.to_string(),
        }),
        "标签" | "tag" => Ok(Condition::Tag {
            presence: presence(parts, op)?,
            tag: operand.to_string(),
        }),
        "文件名称" | "filename" => Ok(Condition::Filename {
            op: pattern_op(parts, op)?,
            pattern: compile(operand)?,
        }),
        "文件路径" | "path" => Ok(Condition::Path {
            op: pattern_op(parts, op)?,
            pattern: compile(operand)?,
        }),
        other => Err(invalid(parts, format!("unknown condition kind '{}'", other))),
    }
}

/// Parse a list of tuples. Any bad tuple fails the whole list.
pub fn parse_conditions(tuples: &[Vec<String>]) -> Result<Vec<Condition>> {
    tuples.iter().map(|t| parse_condition(t.as_slice())).collect()
}

/// Parse a JSON array of string arrays, e.g. `[["标签","包含","w"]]`.
pub fn parse_conditions_json(json: &str) -> Result<Vec<Condition>> {
    let tuples: Vec<Vec<String>> =
        serde_json::from_str(json).map_err(|e| VaultError::InvalidCondition {
            condition: Vec::new(),
            message: format!("expected a JSON array of string arrays: {}", e),
        })?;
    parse_conditions(&tuples)
}

fn presence<S: AsRef<str>>(parts: &[S], op: &str) -> Result<Presence> {
    match op {
        "包含" | "includes" => Ok(Presence::Includes),
        "不包含" | "excludes" => Ok(Presence::Excludes),
        other => Err(invalid(
            parts,
            format!("unknown operator '{}' (expected 包含/includes or 不包含/excludes)", other),
        )),
    }
}

fn pattern_op<S: AsRef<str>>(parts: &[S], op: &str) -> Result<PatternOp> {
    match op {
        "符合" | "matches" => Ok(PatternOp::Matches),
        "不符合" | "not-matches" | "notMatches" => Ok(PatternOp::NotMatches),
        other => Err(invalid(
            parts,
            format!("unknown operator '{}' (expected 符合/matches or 不符合/not-matches)", other),
        )),
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| VaultError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

fn invalid<S: AsRef<str>>(parts: &[S], message: String) -> VaultError {
    VaultError::InvalidCondition {
        condition: parts.iter().map(|p| p.as_ref().to_string()).collect(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_presence() {
        let cond = parse_condition(&["yaml", "包含", "status"]).unwrap();
        assert!(matches!(
            cond,
            Condition::Header { presence: Presence::Includes, ref name } if name == "status"
        ));

        let cond = parse_condition(&["header", "excludes", "status"]).unwrap();
        assert!(matches!(
            cond,
            Condition::Header { presence: Presence::Excludes, .. }
        ));
    }

    #[test]
    fn test_header_value_uses_second_slot_as_name() {
        let cond = parse_condition(&["yaml属性", "status", "done"]).unwrap();
        match cond {
            Condition::HeaderValue { name, value } => {
                assert_eq!(name, "status");
                assert_eq!(value, "done");
            }
            other => panic!("unexpected condition: {:?}", other),
        }
    }

    #[test]
    fn test_tag_aliases() {
        let zh = parse_condition(&["标签", "不包含", "w"]).unwrap();
        let en = parse_condition(&["tag", "excludes", "w"]).unwrap();
        for cond in [zh, en] {
            assert!(matches!(
                cond,
                Condition::Tag { presence: Presence::Excludes, ref tag } if tag == "w"
            ));
        }
    }

    #[test]
    fn test_pattern_conditions() {
        let cond = parse_condition(&["文件路径", "符合", "^/n/"]).unwrap();
        match cond {
            Condition::Path { op, pattern } => {
                assert_eq!(op, PatternOp::Matches);
                assert!(pattern.is_match("/n/d1"));
            }
            other => panic!("unexpected condition: {:?}", other),
        }

        for op in ["不符合", "not-matches", "notMatches"] {
            let cond = parse_condition(&["filename", op, "x"]).unwrap();
            assert!(matches!(
                cond,
                Condition::Filename { op: PatternOp::NotMatches, .. }
            ));
        }
    }

    #[test]
    fn test_malformed_pattern() {
        let err = parse_condition(&["文件名称", "符合", "("]).unwrap_err();
        assert!(matches!(err, VaultError::InvalidPattern { ref pattern, .. } if pattern == "("));
    }

    #[test]
    fn test_unknown_kind_and_operator() {
        assert!(matches!(
            parse_condition(&["colour", "includes", "red"]),
            Err(VaultError::InvalidCondition { .. })
        ));
        assert!(matches!(
            parse_condition(&["tag", "符合", "w"]),
            Err(VaultError::InvalidCondition { .. })
        ));
        assert!(matches!(
            parse_condition(&["path", "includes", "w"]),
            Err(VaultError::InvalidCondition { .. })
        ));
    }

    #[test]
    fn test_wrong_arity() {
        let err = parse_condition(&["tag", "includes"]).unwrap_err();
        match err {
            VaultError::InvalidCondition { condition, .. } => {
                assert_eq!(condition, vec!["tag", "includes"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_json() {
        let conds = parse_conditions_json(r#"[["标签","包含","w"],["path","matches","^/n/"]]"#)
            .unwrap();
        assert_eq!(conds.len(), 2);
        assert!(parse_conditions_json("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_json_rejects_bad_shape() {
        assert!(matches!(
            parse_conditions_json(r#"{"tag": "w"}"#),
            Err(VaultError::InvalidCondition { .. })
        ));
        assert!(matches!(
            parse_conditions_json(r#"[["tag","includes","w"],["tag"]]"#),
            Err(VaultError::InvalidCondition { .. })
        ));
    }
}
