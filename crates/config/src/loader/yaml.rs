//! YAML configuration file reading.
//!
//! Responsibilities:
//! - Read and parse the YAML file named by `config_path`.
//! - Classify the expected failure modes as outcomes instead of errors.
//!
//! Does NOT handle:
//! - Path resolution against `root_path` (see `Settings::resolved_config_path`).
//! - Writing the file (see `persistence`).
//!
//! Invariants:
//! - Not found, is-a-directory, permission denied, undecodable bytes and
//!   malformed YAML are outcomes; every other I/O failure is an error.

use std::io::ErrorKind;
use std::path::Path;

use serde_yaml::Value;

use super::error::ConfigError;

/// Result of attempting to read the YAML configuration file.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigFileOutcome {
    /// The file was read and parsed.
    Loaded(Value),
    /// No file exists at the path; the prior `config` is kept.
    NotFound,
    /// The path exists but cannot be read as a file; the prior `config` is kept.
    Unreadable { kind: ErrorKind },
    /// The file could not be decoded or parsed; the prior `config` is kept.
    Malformed { message: String },
}

/// Read the YAML file at `path`.
pub fn read_config_file(path: &Path) -> Result<ConfigFileOutcome, ConfigError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            return match e.kind() {
                ErrorKind::NotFound => Ok(ConfigFileOutcome::NotFound),
                kind @ (ErrorKind::IsADirectory | ErrorKind::PermissionDenied) => {
                    Ok(ConfigFileOutcome::Unreadable { kind })
                }
                ErrorKind::InvalidData => Ok(ConfigFileOutcome::Malformed {
                    message: e.to_string(),
                }),
                _ => Err(ConfigError::ConfigFileRead {
                    path: path.to_path_buf(),
                    source: e,
                }),
            };
        }
    };

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            return Ok(ConfigFileOutcome::Malformed {
                message: format!("file is not valid UTF-8: {e}"),
            });
        }
    };

    match serde_yaml::from_str::<Value>(&text) {
        Ok(value) => Ok(ConfigFileOutcome::Loaded(value)),
        Err(e) => Ok(ConfigFileOutcome::Malformed {
            message: e.to_string(),
        }),
    }
}
