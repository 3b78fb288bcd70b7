//! Dotted-path resolution against a store, memoized per store.
//!
//! A path like `"ftp.name"` is split on `.` and walked segment by segment:
//! group first, then setting. Stored values are never maps, so a path
//! extending past a setting cannot resolve. Unlike the lenient single-key
//! probes on [`ConfigStore`], an unresolvable segment here is a hard error.

use crate::error::ConftagError;
use crate::store::{ConfigStore, Group};
use crate::value::Value;

/// What a dotted path resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    /// A whole group, reached by a single-segment path like `"ftp"`.
    Group(Group),
    /// A single setting's value, reached by `"group.setting"`.
    Setting(Value),
}

impl QueryResult {
    /// Returns the value if the path resolved to a single setting.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            QueryResult::Setting(value) => Some(value),
            QueryResult::Group(_) => None,
        }
    }

    /// Returns the group if the path resolved to one.
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            QueryResult::Group(group) => Some(group),
            QueryResult::Setting(_) => None,
        }
    }
}

/// Resolve `path`, consulting the store's cache first.
///
/// Only successful resolutions are memoized; a failing path is re-walked on
/// every query (and keeps failing until the caller fixes the path — the
/// store never changes).
pub(crate) fn query(store: &ConfigStore, path: &str) -> Result<QueryResult, ConftagError> {
    if let Some(hit) = store.cache_get(path) {
        return Ok(hit);
    }
    let resolved = walk(store, path)?;
    store.cache_insert(path, resolved.clone());
    Ok(resolved)
}

fn walk(store: &ConfigStore, path: &str) -> Result<QueryResult, ConftagError> {
    let mut segments = path.split('.');
    let first = segments.next().unwrap_or_default();

    let group = store
        .group(first)
        .ok_or_else(|| not_found(path, first))?;

    let Some(second) = segments.next() else {
        return Ok(QueryResult::Group(group.clone()));
    };

    let value = group.get(second).ok_or_else(|| not_found(path, second))?;

    // Values are scalars or lists, never maps; nothing deeper can resolve.
    if let Some(extra) = segments.next() {
        return Err(not_found(path, extra));
    }

    Ok(QueryResult::Setting(value.clone()))
}

fn not_found(path: &str, segment: &str) -> ConftagError {
    ConftagError::PathNotFound {
        path: path.to_string(),
        segment: segment.to_string(),
    }
}
