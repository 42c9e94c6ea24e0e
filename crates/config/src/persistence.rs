//! YAML configuration persistence.
//!
//! Responsibilities:
//! - Write a configuration document to the settings' YAML file.
//!
//! Does NOT handle:
//! - Reading the YAML file back (see `loader`).
//! - Creating missing parent directories.
//!
//! Invariants:
//! - The target path is resolved against `root_path` exactly as the loader does.
//! - An existing file is truncated and overwritten.

use std::path::PathBuf;

use serde::Serialize;

use crate::loader::ConfigError;
use crate::types::Settings;

/// Serialize `config` as YAML to the settings' config path.
///
/// Returns the absolute path that was written.
///
/// # Errors
///
/// Returns `ConfigError::Serialize` if `config` cannot be represented as YAML,
/// or `ConfigError::ConfigFileWrite` if the file cannot be created or written,
/// including when its parent directory does not exist.
pub fn save_config<T>(settings: &Settings, config: &T) -> Result<PathBuf, ConfigError>
where
    T: Serialize + ?Sized,
{
    let path = settings.resolved_config_path();
    let yaml = serde_yaml::to_string(config)?;

    std::fs::write(&path, yaml).map_err(|source| ConfigError::ConfigFileWrite {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), "Saved YAML config");
    Ok(path)
}
