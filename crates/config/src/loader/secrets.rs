//! Secrets directory reading.
//!
//! Responsibilities:
//! - Read one value per settings field from files in the secrets directory.
//!
//! Does NOT handle:
//! - Validating that the directory exists (see `EnvSources::resolve`).
//!
//! Invariants:
//! - A field's file is named either `<field>` or `<PREFIX>_<FIELD>`,
//!   matched case-insensitively; the bare field name wins if both exist.
//! - Among file names that differ only in case, the all-lowercase one wins,
//!   otherwise the first in byte order; the collision is logged.
//! - File contents are trimmed. Missing files are skipped; subdirectories are
//!   skipped with a warning.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use crate::types::{FIELDS, FieldSpec};

/// Read the secret value for every field that has a file in `dir`.
pub(crate) fn read_secrets(
    dir: &Path,
    prefix: &str,
) -> Result<Vec<(&'static FieldSpec, String)>, ConfigError> {
    let read_error = |source| ConfigError::SecretsRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();

    let mut files: HashMap<String, PathBuf> = HashMap::new();
    for name in names {
        let key = name.to_lowercase();
        let Some(existing) = files.get(&key).map(|p| file_name(p).to_string()) else {
            files.insert(key, dir.join(&name));
            continue;
        };

        let (kept, ignored) = if name == key {
            (name.as_str(), existing.as_str())
        } else {
            (existing.as_str(), name.as_str())
        };
        tracing::warn!(kept, ignored, "Secrets files differ only in case");
        if name == key {
            files.insert(key, dir.join(&name));
        }
    }

    let mut secrets = Vec::new();
    for spec in FIELDS {
        let candidates = [
            spec.name.to_string(),
            spec.var_name(prefix).to_lowercase(),
        ];
        let Some(path) = candidates.iter().find_map(|name| files.get(name)) else {
            continue;
        };

        if path.is_dir() {
            tracing::warn!(path = %path.display(), "Skipping secrets entry that is a directory");
            continue;
        }

        let value = std::fs::read_to_string(path).map_err(|source| ConfigError::SecretsRead {
            path: path.clone(),
            source,
        })?;
        secrets.push((spec, value.trim().to_string()));
    }

    tracing::debug!(path = %dir.display(), count = secrets.len(), "Loaded secrets");
    Ok(secrets)
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}
