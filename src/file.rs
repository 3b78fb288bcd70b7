//! File loading: the thin I/O collaborator in front of the parser.
//!
//! The core parser only ever sees text; this module is the one place that
//! touches the filesystem, and the one place that can produce
//! [`FileUnreadable`](crate::ConftagError::FileUnreadable).

use std::fs;
use std::path::Path;

use crate::error::ConftagError;
use crate::overrides::OverrideSet;
use crate::parse;
use crate::store::ConfigStore;

/// Read a settings file and parse it against the active override-tag set.
///
/// Read failures (missing file, permissions) surface as
/// [`FileUnreadable`](ConftagError::FileUnreadable) with the offending path;
/// everything after the read is [`parse`](crate::parse).
pub fn load(path: impl AsRef<Path>, active: &OverrideSet) -> Result<ConfigStore, ConftagError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConftagError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse::parse(&content, active)
}
