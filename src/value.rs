//! The typed value a setting line coerces to, and the coercion itself.
//!
//! Coercion has no error path: any raw value string becomes a [`Value`].
//! The rules, in order:
//!
//! 1. Everything after the first `;` is a trailing comment and is discarded;
//!    the remainder is whitespace-trimmed.
//! 2. A value whose first character is `"` is a single string scalar. The
//!    quotes are **retained** — quoting exists only to protect a value from
//!    comma-splitting, it is not a string literal syntax.
//! 3. Anything else is split on `,`, each segment trimmed. Two or more
//!    segments form an ordered list; boolean coercion never applies to list
//!    elements.
//! 4. A sole segment reading `no`, `0`, or `false` becomes boolean false;
//!    `yes`, `1`, or `true` becomes boolean true; any other sole segment is
//!    kept as a string unchanged (numbers included — `2147483648` stays a
//!    string).

use std::fmt;

/// A coerced setting value: boolean, string scalar, or ordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Str(String),
    /// An ordered sequence of raw segments. Always length ≥ 2 — a
    /// single-segment split coerces to `Bool` or `Str` instead.
    List(Vec<String>),
}

impl Value {
    /// Returns the boolean if this value is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string slice if this value is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the segments if this value is a `List`.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Booleans display as `true`/`false`, strings verbatim, lists comma-joined.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

/// Coerce a raw value string (everything after `=` on a setting line) into a
/// typed [`Value`].
///
/// Comma-split segments are individually trimmed, so `a, b` and `a,b` produce
/// the same list.
pub fn coerce(raw: &str) -> Value {
    // Everything after the first ';' is a trailing comment.
    let stripped = match raw.find(';') {
        Some(i) => &raw[..i],
        None => raw,
    };
    let trimmed = stripped.trim();

    // A leading '"' suppresses comma-splitting; quotes are kept.
    if trimmed.starts_with('"') {
        return Value::Str(trimmed.to_string());
    }

    let segments: Vec<&str> = trimmed.split(',').map(str::trim).collect();
    if segments.len() > 1 {
        return Value::List(segments.iter().map(|s| s.to_string()).collect());
    }

    match segments[0] {
        "no" | "0" | "false" => Value::Bool(false),
        "yes" | "1" | "true" => Value::Bool(true),
        other => Value::Str(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_keywords_false() {
        assert_eq!(coerce("no"), Value::Bool(false));
        assert_eq!(coerce("0"), Value::Bool(false));
        assert_eq!(coerce("false"), Value::Bool(false));
    }

    #[test]
    fn boolean_keywords_true() {
        assert_eq!(coerce("yes"), Value::Bool(true));
        assert_eq!(coerce("1"), Value::Bool(true));
        assert_eq!(coerce("true"), Value::Bool(true));
    }

    #[test]
    fn plain_scalar_unchanged() {
        assert_eq!(coerce("/etc/var/uploads"), Value::Str("/etc/var/uploads".into()));
    }

    #[test]
    fn numeric_value_stays_string() {
        assert_eq!(coerce("2147483648"), Value::Str("2147483648".into()));
    }

    #[test]
    fn comma_value_splits_into_list() {
        assert_eq!(
            coerce("array, of, values"),
            Value::List(vec!["array".into(), "of".into(), "values".into()])
        );
    }

    #[test]
    fn list_segments_trimmed() {
        assert_eq!(
            coerce("  a ,b,  c  "),
            Value::List(vec!["a".into(), "b".into(), "c".into()])
        );
    }

    #[test]
    fn list_never_coerces_booleans() {
        assert_eq!(
            coerce("yes, no"),
            Value::List(vec!["yes".into(), "no".into()])
        );
    }

    #[test]
    fn quoting_suppresses_comma_split_and_keeps_quotes() {
        assert_eq!(
            coerce("\"hello there, ftp uploading\""),
            Value::Str("\"hello there, ftp uploading\"".into())
        );
    }

    #[test]
    fn quoted_boolean_keyword_stays_string() {
        assert_eq!(coerce("\"yes\""), Value::Str("\"yes\"".into()));
    }

    #[test]
    fn trailing_comment_stripped() {
        assert_eq!(
            coerce("/srv/uploads ; the default upload dir"),
            Value::Str("/srv/uploads".into())
        );
    }

    #[test]
    fn comment_before_comma_prevents_list() {
        assert_eq!(coerce("a ; b, c"), Value::Str("a".into()));
    }

    #[test]
    fn whitespace_trimmed() {
        assert_eq!(coerce("   hello   "), Value::Str("hello".into()));
    }

    #[test]
    fn comment_only_value_is_empty_string() {
        assert_eq!(coerce(" ; just a comment"), Value::Str(String::new()));
    }

    #[test]
    fn empty_list_tail_kept_as_segment() {
        assert_eq!(coerce("a,"), Value::List(vec!["a".into(), String::new()]));
    }

    #[test]
    fn display_formats() {
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Str("x".into()).to_string(), "x");
        assert_eq!(
            Value::List(vec!["a".into(), "b".into()]).to_string(),
            "a, b"
        );
    }
}
