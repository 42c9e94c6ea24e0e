//! Error types for settings loading.
//!
//! Responsibilities:
//! - Define error variants for all bootstrap, env file, secrets and YAML failures.
//!
//! Does NOT handle:
//! - Non-fatal conditions (invalid secrets directory, unreadable YAML file);
//!   those are logged or reported through `ConfigFileOutcome`.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, etc.).
//! - Errors NEVER include raw env file or bootstrap line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during settings loading and saving.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A non-blank bootstrap line has no `=`.
    ///
    /// SAFETY: Only the line number is reported, not the line content.
    #[error("Malformed line {line} in bootstrap file {path}: expected key=value")]
    BootstrapParse { path: PathBuf, line: usize },

    #[error("Failed to read bootstrap file at {path}")]
    BootstrapRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing required key '{0}' in bootstrap file")]
    MissingBootstrapKey(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Unknown env file encoding '{0}'")]
    UnsupportedEncoding(String),

    /// The env file contains bytes that are invalid in its encoding.
    #[error("Env file is not valid {encoding}")]
    DotenvDecode { encoding: &'static str },

    /// Failed to read the env file due to an I/O error.
    #[error("Failed to read env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load env file")]
    DotenvUnknown,

    #[error("Failed to read secrets from {path}")]
    SecretsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config file at {path}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file at {path}")]
    ConfigFileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] serde_yaml::Error),
}
