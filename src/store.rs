//! The parsed settings store: group → setting → value, immutable after
//! construction, plus the per-store path-query cache.
//!
//! Single-key lookups ([`ConfigStore::group`], [`Group::get`],
//! [`ConfigStore::get`]) are deliberately lenient — a missing key is `None`,
//! not an error — so optional settings can be probed without a presence
//! check. Dotted-path queries ([`ConfigStore::query`]) are the strict
//! counterpart: any unresolvable segment is a hard
//! [`PathNotFound`](crate::ConftagError::PathNotFound).

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use crate::error::ConftagError;
use crate::query::{self, QueryResult};
use crate::value::Value;

/// One group's settings. Never replaced once created — re-declaring the group
/// header during parse reopens this same map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    settings: BTreeMap<String, Value>,
}

impl Group {
    /// Look up a single setting. Lenient: `None` for anything never declared.
    pub fn get(&self, setting: &str) -> Option<&Value> {
        self.settings.get(setting)
    }

    pub fn contains(&self, setting: &str) -> bool {
        self.settings.contains_key(setting)
    }

    /// Iterate settings in deterministic (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.settings.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Insert or overwrite a setting. Parse-time only — the store is
    /// immutable once handed to the caller.
    pub(crate) fn insert(&mut self, name: String, value: Value) {
        self.settings.insert(name, value);
    }
}

/// The fully parsed, immutable settings store.
///
/// Built once by [`parse`](crate::parse) and never mutated afterwards, which
/// is what makes the owned query cache sound: entries accumulate and are
/// reused for the store's whole lifetime, with no invalidation.
#[derive(Debug, Default)]
pub struct ConfigStore {
    groups: BTreeMap<String, Group>,
    cache: Mutex<HashMap<String, QueryResult>>,
}

impl ConfigStore {
    pub(crate) fn new(groups: BTreeMap<String, Group>) -> Self {
        Self {
            groups,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Look up a group. Lenient: `None` if the group was never declared.
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    /// Convenience single-key probe: `store.get("ftp", "enabled")`.
    /// Lenient on both levels.
    pub fn get(&self, group: &str, setting: &str) -> Option<&Value> {
        self.groups.get(group)?.get(setting)
    }

    /// Iterate groups in deterministic (sorted) order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &Group)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Resolve a dotted path (`"ftp.name"`), memoized per store.
    ///
    /// The first query for a path walks the store segment by segment; later
    /// queries for the same path return the cached result without
    /// re-walking. Failed resolutions are not cached and fail with
    /// [`PathNotFound`](ConftagError::PathNotFound) naming the first
    /// unresolvable segment.
    pub fn query(&self, path: &str) -> Result<QueryResult, ConftagError> {
        query::query(self, path)
    }

    pub(crate) fn cache_get(&self, path: &str) -> Option<QueryResult> {
        self.lock_cache().get(path).cloned()
    }

    pub(crate) fn cache_insert(&self, path: &str, resolved: QueryResult) {
        self.lock_cache().insert(path.to_string(), resolved);
    }

    /// The check-then-insert sequence is racy under concurrent queries, so
    /// every cache touch goes through this lock. A poisoned cache is still a
    /// valid map of clones and is used as-is.
    fn lock_cache(&self) -> std::sync::MutexGuard<'_, HashMap<String, QueryResult>> {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Equality is over parsed contents only; the memoization state is not part
/// of a store's identity.
impl PartialEq for ConfigStore {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}
