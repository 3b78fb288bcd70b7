//! Group-scoped INI-style settings with per-line override tags. Parse a
//! document once, query it forever.
//!
//! Conftag parses a line-oriented settings format into an immutable two-level
//! store — group → setting → typed value — and answers dotted-path queries
//! against it through a per-store memoizing cache.
//!
//! ```
//! use conftag::{parse, OverrideSet, Value};
//!
//! let doc = "\
//! [ftp]
//! enabled = no
//! path = /etc/var/uploads
//! path<production> = /srv/uploads
//! ";
//! let active = OverrideSet::new().enable("production");
//! let store = parse(doc, &active)?;
//!
//! assert_eq!(store.get("ftp", "enabled"), Some(&Value::Bool(false)));
//! let path = store.query("ftp.path")?; // cached from here on
//! assert_eq!(path.as_value(), Some(&Value::Str("/srv/uploads".into())));
//! # Ok::<(), conftag::ConftagError>(())
//! ```
//!
//! # The format
//!
//! Line-oriented, `\n`-separated. Four kinds of line:
//!
//! ```text
//! ; a full-line comment
//! [groupname]
//! setting = value          ; optional trailing comment
//! setting<tag> = value
//! ```
//!
//! - **Group headers** — `[name]`, no spaces inside the brackets. Every
//!   setting belongs to the most recently opened group. Re-declaring a header
//!   *reopens* the group: existing settings are kept, later lines append or
//!   overwrite.
//! - **Values** coerce with no error path: `yes`/`no`, `true`/`false`,
//!   `1`/`0` become booleans; a comma-separated value becomes an ordered
//!   list; a value starting with `"` is one scalar with comma-splitting
//!   suppressed (and the quotes kept); everything else — numbers included —
//!   stays a string. See [`Value`].
//! - **Override tags** make a line conditional. `path<production> = /srv` is
//!   applied only when `production` is in the caller's [`OverrideSet`];
//!   otherwise the line parses and is discarded, leaving any earlier value
//!   for that setting in place. Matching is literal — the conventional `*`
//!   tag matches only a clause spelled exactly `<*>`.
//!
//! # Lenient probes, strict queries
//!
//! Single-key access is deliberately forgiving: [`ConfigStore::group`],
//! [`ConfigStore::get`], and [`Group::get`] return `Option`, so optional
//! settings can be probed without a presence check. Dotted-path queries via
//! [`ConfigStore::query`] are the strict counterpart — any segment that
//! fails to resolve is a hard [`PathNotFound`](ConftagError::PathNotFound)
//! naming the segment.
//!
//! # The query cache
//!
//! Each store owns its cache; two stores never contaminate each other's
//! results. The store is immutable after [`parse`], which is what makes
//! never-invalidated memoization sound: the first query for a path walks the
//! store, every later query for the same path is a map lookup. Only
//! successful resolutions are cached.
//!
//! # Errors
//!
//! All fallible operations return [`ConftagError`]. Parse-time errors are
//! fatal to the whole load — the first malformed line aborts the pass with
//! its line number and raw content, and no partial store is returned.
//! Query-time errors are local to the one query. See the [`error`] module
//! for the full taxonomy.
//!
//! # Clap adapter
//!
//! The `cli` module (behind the `clap` feature, on by default) offers
//! [`InspectArgs`], a drop-in clap derive type giving a tool `list`/`get`
//! subcommands over a settings file with override tags from `--tag` flags.
//! To use conftag without clap:
//!
//! ```toml
//! conftag = { version = "...", default-features = false }
//! ```

pub mod error;

#[cfg(feature = "clap")]
mod cli;
mod file;
mod line;
mod overrides;
mod parse;
mod query;
mod store;
mod value;

#[cfg(feature = "clap")]
pub use cli::{InspectAction, InspectArgs, InspectResult, InspectSubcommand, inspect};
pub use error::ConftagError;
pub use file::load;
pub use overrides::OverrideSet;
pub use parse::parse;
pub use query::QueryResult;
pub use store::{ConfigStore, Group};
pub use value::Value;
