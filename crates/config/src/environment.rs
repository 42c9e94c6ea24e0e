//! Snapshot of environment variables.
//!
//! Responsibilities:
//! - Capture process environment variables into an owned, injectable value.
//! - Provide the trimmed/non-empty lookup used for control variables.
//!
//! Does NOT handle:
//! - Mapping variables onto settings fields (see `loader::env`).
//! - Writing variables back to the process (see `EnvSources::export`).
//!
//! Invariants:
//! - A snapshot never changes after construction; the loader reads only the
//!   snapshot it was given, so tests can run without touching the process.
//! - Variables whose name or value is not valid Unicode are skipped.

use std::collections::BTreeMap;

/// An owned set of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Capture the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        }
    }

    /// Build a snapshot from explicit pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw value of `key`, exactly as captured.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Value of `key`, returning None if unset, empty, or whitespace-only.
    /// Returns the trimmed value if present.
    pub fn non_empty(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Iterate over all variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
