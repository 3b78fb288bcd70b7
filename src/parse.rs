//! The group-scoped document parser: one forward pass over the lines,
//! tracking the current group and assembling the store.
//!
//! Operates on pre-loaded text with no I/O, so the whole pipeline is testable
//! with synthetic documents. Any malformed line aborts the entire parse — the
//! caller never sees a partially populated store.

use std::collections::BTreeMap;

use crate::error::ConftagError;
use crate::line;
use crate::overrides::OverrideSet;
use crate::store::{ConfigStore, Group};

/// Parse a full settings document against the active override-tag set.
///
/// Per line, after trimming:
/// - empty lines and `;` comment lines are skipped;
/// - `[name]` opens (or *reopens*) a group — a repeated header never clears
///   previously applied settings, it only makes the group current again;
/// - anything else is a setting line, classified by [`line::classify`]; lines
///   whose override tag is inactive are discarded without touching the store,
///   and applied lines overwrite any prior value for that (group, setting).
///
/// A setting line before the first group header fails with
/// [`SettingBeforeGroup`](ConftagError::SettingBeforeGroup).
pub fn parse(content: &str, active: &OverrideSet) -> Result<ConfigStore, ConftagError> {
    let mut groups: BTreeMap<String, Group> = BTreeMap::new();
    let mut current: Option<String> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with(';') {
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix('[') {
            let Some(name) = rest.strip_suffix(']') else {
                return Err(ConftagError::MalformedGroupHeader {
                    line: line_no,
                    content: trimmed.to_string(),
                });
            };
            if name.contains(' ') {
                return Err(ConftagError::InvalidGroupName {
                    line: line_no,
                    name: name.to_string(),
                });
            }
            groups.entry(name.to_string()).or_default();
            current = Some(name.to_string());
            continue;
        }

        let Some(group) = current.as_deref() else {
            return Err(ConftagError::SettingBeforeGroup {
                line: line_no,
                content: trimmed.to_string(),
            });
        };

        let parsed = line::classify(trimmed, line_no, active)?;
        if parsed.apply {
            groups
                .get_mut(group)
                .expect("conftag: current group was inserted when its header was read")
                .insert(parsed.name, parsed.value);
        }
    }

    Ok(ConfigStore::new(groups))
}
