//! Setting-line classification and override resolution.
//!
//! One trimmed, non-empty, non-comment, non-header line comes in; out comes
//! the setting name, its coerced value, and the decision whether to apply it
//! given the caller's active override-tag set. A line whose override tag is
//! inactive still parses fully — it is discarded by the caller, not an error.
//!
//! Operates on a single pre-trimmed line with no document state, so the whole
//! contract is testable with synthetic input.

use crate::error::ConftagError;
use crate::overrides::OverrideSet;
use crate::value::{self, Value};

/// A successfully classified setting line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSetting {
    pub name: String,
    pub value: Value,
    /// Whether the line should be written into the store: `true` when no
    /// override clause is present or when the clause's tag is active.
    pub apply: bool,
}

/// Classify one setting line of the form `name = value` or
/// `name<tag> = value`.
///
/// `line_no` is the 1-indexed document line, carried into error variants.
///
/// Contract:
/// - exactly one `=`, with a non-empty right-hand side as split (zero or
///   multiple `=`, or an RHS of `""`, is [`MalformedSettingLine`]);
/// - the name (left of an optional `<`) must be non-empty after trimming and
///   must not start with `>` ([`MalformedSettingName`]);
/// - an override clause, when present, must end with `>`
///   ([`MalformedOverrideClause`]); the tag is the text before that `>`,
///   trimmed. The left-hand side splits on at most one `<`, so any further
///   `<` is part of the tag text.
///
/// [`MalformedSettingLine`]: ConftagError::MalformedSettingLine
/// [`MalformedSettingName`]: ConftagError::MalformedSettingName
/// [`MalformedOverrideClause`]: ConftagError::MalformedOverrideClause
pub fn classify(
    line: &str,
    line_no: usize,
    active: &OverrideSet,
) -> Result<ParsedSetting, ConftagError> {
    let pieces: Vec<&str> = line.split('=').collect();
    if pieces.len() != 2 || pieces[1].is_empty() {
        return Err(ConftagError::MalformedSettingLine {
            line: line_no,
            content: line.to_string(),
        });
    }
    let (lhs, rhs) = (pieces[0], pieces[1]);

    let (name_part, clause) = match lhs.split_once('<') {
        Some((name, clause)) => (name, Some(clause)),
        None => (lhs, None),
    };

    let name = name_part.trim();
    if name.is_empty() || name.starts_with('>') {
        return Err(ConftagError::MalformedSettingName {
            line: line_no,
            content: line.to_string(),
        });
    }

    let apply = match clause {
        None => true,
        Some(clause) => {
            let clause = clause.trim();
            let Some(tag) = clause.strip_suffix('>') else {
                return Err(ConftagError::MalformedOverrideClause {
                    line: line_no,
                    content: line.to_string(),
                });
            };
            active.contains(tag.trim())
        }
    };

    Ok(ParsedSetting {
        name: name.to_string(),
        value: value::coerce(rhs),
        apply,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn none() -> OverrideSet {
        OverrideSet::new()
    }

    fn classify_ok(line: &str, active: &OverrideSet) -> ParsedSetting {
        classify(line, 1, active).unwrap()
    }

    #[test]
    fn plain_setting_always_applies() {
        let parsed = classify_ok("enabled = no", &none());
        assert_eq!(parsed.name, "enabled");
        assert_eq!(parsed.value, Value::Bool(false));
        assert!(parsed.apply);
    }

    #[test]
    fn active_override_applies() {
        let active = OverrideSet::new().enable("production");
        let parsed = classify_ok("path<production> = /srv/uploads", &active);
        assert_eq!(parsed.name, "path");
        assert_eq!(parsed.value, Value::Str("/srv/uploads".into()));
        assert!(parsed.apply);
    }

    #[test]
    fn inactive_override_parses_but_does_not_apply() {
        let active = OverrideSet::new().enable("production");
        let parsed = classify_ok("path<ubuntu> = /etc/var/uploads", &active);
        assert_eq!(parsed.name, "path");
        assert!(!parsed.apply);
    }

    #[test]
    fn wildcard_clause_needs_wildcard_tag() {
        let parsed = classify_ok("path<*> = /srv/newtest", &none());
        assert!(!parsed.apply);

        let active = OverrideSet::new().enable(OverrideSet::WILDCARD);
        let parsed = classify_ok("path<*> = /srv/newtest", &active);
        assert!(parsed.apply);
    }

    #[test]
    fn wildcard_tag_does_not_match_named_clause() {
        let active = OverrideSet::new().enable(OverrideSet::WILDCARD);
        let parsed = classify_ok("path<ubuntu> = /etc/var/uploads", &active);
        assert!(!parsed.apply);
    }

    #[test]
    fn override_tag_is_trimmed() {
        let active = OverrideSet::new().enable("ubuntu");
        let parsed = classify_ok("path< ubuntu > = /etc/var/uploads", &active);
        assert!(parsed.apply);
    }

    #[test]
    fn no_equals_is_malformed() {
        let err = classify("just some text", 4, &none()).unwrap_err();
        assert!(matches!(
            err,
            ConftagError::MalformedSettingLine { line: 4, .. }
        ));
    }

    #[test]
    fn two_equals_is_malformed() {
        let err = classify("a = b = c", 1, &none()).unwrap_err();
        assert!(matches!(err, ConftagError::MalformedSettingLine { .. }));
    }

    #[test]
    fn empty_value_is_malformed() {
        let err = classify("name =", 1, &none()).unwrap_err();
        assert!(matches!(err, ConftagError::MalformedSettingLine { .. }));
    }

    #[test]
    fn whitespace_only_value_coerces_to_empty_string() {
        // The empty-value check fires on the raw split, before trimming. A
        // lone comment after '=' therefore coerces rather than erroring.
        let parsed = classify_ok("name = ; comment", &none());
        assert_eq!(parsed.value, Value::Str(String::new()));
    }

    #[test]
    fn empty_name_is_malformed() {
        let err = classify("<ubuntu> = value", 2, &none()).unwrap_err();
        assert!(matches!(
            err,
            ConftagError::MalformedSettingName { line: 2, .. }
        ));
    }

    #[test]
    fn name_starting_with_gt_is_malformed() {
        let err = classify(">name = value", 1, &none()).unwrap_err();
        assert!(matches!(err, ConftagError::MalformedSettingName { .. }));
    }

    #[test]
    fn unterminated_override_clause_is_malformed() {
        let err = classify("path<ubuntu = /etc/var/uploads", 9, &none()).unwrap_err();
        assert!(matches!(
            err,
            ConftagError::MalformedOverrideClause { line: 9, .. }
        ));
    }

    #[test]
    fn second_angle_bracket_becomes_tag_text() {
        // The LHS splits on at most one '<'; "a<b" is a tag like any other
        // and simply never matches unless enabled verbatim.
        let parsed = classify_ok("name<a<b> = value", &none());
        assert!(!parsed.apply);

        let active = OverrideSet::new().enable("a<b");
        let parsed = classify_ok("name<a<b> = value", &active);
        assert!(parsed.apply);
    }

    #[test]
    fn value_is_coerced() {
        let parsed = classify_ok("params = array, of, values", &none());
        assert_eq!(
            parsed.value,
            Value::List(vec!["array".into(), "of".into(), "values".into()])
        );
    }

    #[test]
    fn name_is_trimmed() {
        let parsed = classify_ok("spaced   = v", &none());
        assert_eq!(parsed.name, "spaced");
    }
}
