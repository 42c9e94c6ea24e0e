//! Bootstrap file reader.
//!
//! Responsibilities:
//! - Parse the flat `key=value` bootstrap file (`config.txt`) read before any
//!   other configuration exists.
//! - Expose the application name, variable prefix and version.
//!
//! Does NOT handle:
//! - Comments, quoting, escaping or multi-line values. Any non-blank line
//!   without `=` is a hard error.
//!
//! Invariants:
//! - A missing file yields an empty mapping; required keys then fail with
//!   `ConfigError::MissingBootstrapKey` when accessed.
//! - Keys are lower-cased; keys and values are trimmed; later duplicates win.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use crate::loader::ConfigError;

/// Immutable key/value mapping read from the bootstrap file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapConfig {
    values: BTreeMap<String, String>,
}

impl BootstrapConfig {
    /// Load the bootstrap file at `path`.
    ///
    /// Returns an empty mapping if the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No bootstrap file found");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::BootstrapRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut values = BTreeMap::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (key, value) = line.split_once('=').ok_or_else(|| ConfigError::BootstrapParse {
                path: path.to_path_buf(),
                line: index + 1,
            })?;
            values.insert(key.trim().to_lowercase(), value.trim().to_string());
        }

        Ok(Self { values })
    }

    /// Build a bootstrap mapping from explicit pairs, applying the same key rules as `load`.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.as_ref().trim().to_lowercase(), v.as_ref().trim().to_string()))
                .collect(),
        }
    }

    /// Look up a key (case-insensitive).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(&key.to_lowercase()).map(String::as_str)
    }

    /// Look up a key that must be present.
    pub fn require(&self, key: &str) -> Result<&str, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::MissingBootstrapKey(key.to_lowercase()))
    }

    /// The application name, used for default paths.
    pub fn name(&self) -> Result<&str, ConfigError> {
        self.require("name")
    }

    /// The prefix prepended to every environment variable name.
    pub fn var_prefix(&self) -> Result<&str, ConfigError> {
        self.require("var_prefix")
    }

    /// The application version.
    pub fn version(&self) -> Result<&str, ConfigError> {
        self.require("version")
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
