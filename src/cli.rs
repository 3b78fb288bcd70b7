//! Clap adapter for conftag.
//!
//! This module is the **optional integration layer** between conftag's
//! framework-agnostic core and the [clap](https://docs.rs/clap) CLI parser.
//! It is compiled only when the `clap` Cargo feature is enabled (on by
//! default).
//!
//! The module provides [`InspectArgs`], a clap derive type you can embed in
//! your own `#[derive(Parser)]` struct to give a tool `list`/`get`
//! subcommands over a settings file, with override tags taken from repeated
//! `--tag` flags. The only bridges to the core are
//! [`InspectArgs::override_set()`] and [`InspectArgs::into_action()`]; from
//! there everything flows through the clap-free [`inspect`] function, so a
//! different argument parser (or no CLI at all) can construct
//! [`InspectAction`] values directly.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::error::ConftagError;
use crate::overrides::OverrideSet;
use crate::query::QueryResult;
use crate::store::ConfigStore;

/// Clap-derived args for inspecting a settings file.
///
/// Embed this into your app's clap derive:
/// ```ignore
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     inspect: InspectArgs,
/// }
/// ```
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Path to the settings file.
    pub file: PathBuf,

    /// Activate an override tag; repeatable (e.g. `--tag production --tag '*'`).
    #[arg(long = "tag", value_name = "TAG", global = true)]
    pub tags: Vec<String>,

    #[command(subcommand)]
    pub action: Option<InspectSubcommand>,
}

/// Available inspection subcommands.
#[derive(Debug, Subcommand)]
pub enum InspectSubcommand {
    /// Show every resolved `group.setting = value` pair.
    List,
    /// Resolve a dotted path (e.g. "ftp.name").
    Get {
        /// Dotted path: `group` or `group.setting`.
        path: String,
    },
}

/// An inspection request, independent of any CLI framework.
#[derive(Debug, Clone, PartialEq)]
pub enum InspectAction {
    List,
    Get { path: String },
}

impl InspectArgs {
    /// The active override-tag set from the `--tag` flags.
    pub fn override_set(&self) -> OverrideSet {
        self.tags.iter().cloned().collect()
    }

    /// Convert clap-parsed args into a framework-agnostic [`InspectAction`].
    ///
    /// A bare invocation (no subcommand) and an explicit `list` both map to
    /// [`InspectAction::List`].
    pub fn into_action(self) -> InspectAction {
        match self.action {
            None | Some(InspectSubcommand::List) => InspectAction::List,
            Some(InspectSubcommand::Get { path }) => InspectAction::Get { path },
        }
    }
}

/// Result of an inspection. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum InspectResult {
    /// All `group.setting = value` pairs in the store.
    Listing { entries: Vec<(String, String)> },
    /// One resolved dotted path.
    Resolved { path: String, result: QueryResult },
}

impl std::fmt::Display for InspectResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InspectResult::Listing { entries } => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                Ok(())
            }
            InspectResult::Resolved { path, result } => match result {
                QueryResult::Setting(value) => write!(f, "{path} = {value}"),
                QueryResult::Group(group) => {
                    for (i, (setting, value)) in group.iter().enumerate() {
                        if i > 0 {
                            writeln!(f)?;
                        }
                        write!(f, "{path}.{setting} = {value}")?;
                    }
                    Ok(())
                }
            },
        }
    }
}

/// Execute an [`InspectAction`] against a parsed store.
///
/// `List` flattens the whole store into dotted `group.setting` pairs in
/// deterministic order; `Get` runs a cached [`query`](ConfigStore::query).
pub fn inspect(store: &ConfigStore, action: InspectAction) -> Result<InspectResult, ConftagError> {
    match action {
        InspectAction::List => {
            let entries = store
                .groups()
                .flat_map(|(group, settings)| {
                    settings
                        .iter()
                        .map(move |(setting, value)| (format!("{group}.{setting}"), value.to_string()))
                })
                .collect();
            Ok(InspectResult::Listing { entries })
        }
        InspectAction::Get { path } => {
            let result = store.query(&path)?;
            Ok(InspectResult::Resolved { path, result })
        }
    }
}
