//! Environment source adapter.
//!
//! Scans a snapshot of the process environment, drops deny-listed names,
//! and derives a dotted key path from each remaining variable name:
//! lower-cased, with the double-underscore separator mapped to `.`. A
//! single underscore is *not* a separator, so `MAX_CONNECTIONS` stays one
//! flat segment while `DATABASE__MAX__CONNECTIONS` nests three levels deep.
//!
//! Iteration order over the environment is unspecified and may differ
//! across platforms. That is fine: the merge is keyed, so cross-key order
//! never affects the final tree shape, and a later write to the same exact
//! key path simply overwrites the earlier one.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::coerce::coerce;
use crate::constants::DenyList;
use crate::path::{split_key, write_path};

/// Separator between nesting levels in an environment variable name.
pub(crate) const NESTING_SEPARATOR: &str = "__";

/// Source of environment variables.
///
/// Abstracting the snapshot lets tests supply a fixed environment instead
/// of mutating the real one.
pub trait EnvSource {
    /// Iterate over all environment variables in the snapshot.
    fn vars(&self) -> Box<dyn Iterator<Item = (String, String)> + '_>;
}

/// Environment source that reads from the live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnv;

impl EnvSource for StdEnv {
    fn vars(&self) -> Box<dyn Iterator<Item = (String, String)> + '_> {
        Box::new(std::env::vars())
    }
}

/// Environment source backed by a map, for testing.
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: BTreeMap<String, String>,
}

impl MockEnv {
    /// Creates a new empty mock environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock environment from an iterator of name/value pairs.
    pub fn from_pairs<I, K, V>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Sets an environment variable, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl EnvSource for MockEnv {
    fn vars(&self) -> Box<dyn Iterator<Item = (String, String)> + '_> {
        Box::new(self.vars.iter().map(|(k, v)| (k.clone(), v.clone())))
    }
}

/// Builds the environment layer from a snapshot and a deny-list.
///
/// Deny-listed names (exact match or prefix) never influence the result.
/// Names whose derived key contains an empty segment (a trailing `__`, or
/// four underscores in a row) cannot address a schema field and are
/// skipped with a warning.
#[must_use]
pub fn collect(source: &dyn EnvSource, deny: &DenyList) -> Map<String, Value> {
    let mut layer = Map::new();

    for (name, value) in source.vars() {
        if deny.is_denied(&name) {
            continue;
        }

        let key = name.to_lowercase().replace(NESTING_SEPARATOR, ".");

        match split_key(&key) {
            Some(segments) => write_path(&mut layer, &segments, coerce(&value)),
            None => {
                tracing::warn!(var = %name, "ignoring environment variable with an empty key segment");
            }
        }
    }

    layer
}
