use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading, parsing, or querying a settings document.
///
/// Every parse-time variant is fatal to the whole load: the first malformed
/// line aborts the pass and no partial store is returned. [`PathNotFound`]
/// (query-time) is local to the failing query and leaves the store and its
/// cache untouched.
///
/// [`PathNotFound`]: ConftagError::PathNotFound
#[derive(Debug, Error)]
pub enum ConftagError {
    #[error("Failed to read {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Group header missing closing ']' on line {line}: '{content}'")]
    MalformedGroupHeader { line: usize, content: String },

    #[error("Group name contains a space on line {line}: '{name}'")]
    InvalidGroupName { line: usize, name: String },

    #[error("Setting on line {line} appears before any group header: '{content}'")]
    SettingBeforeGroup { line: usize, content: String },

    #[error("Setting on line {line} must have exactly one '=' and a value: '{content}'")]
    MalformedSettingLine { line: usize, content: String },

    #[error("Empty or invalid setting name on line {line}: '{content}'")]
    MalformedSettingName { line: usize, content: String },

    #[error("Override clause missing closing '>' on line {line}: '{content}'")]
    MalformedOverrideClause { line: usize, content: String },

    #[error("Path '{path}' not found: no entry for segment '{segment}'")]
    PathNotFound { path: String, segment: String },
}
