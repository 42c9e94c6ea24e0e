//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError`, `ConfigError` and `CliError` to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-7 are reserved for specific error categories.

use gitlabel_client::ClientError;
use gitlabel_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for gitlabel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - the access token was rejected (HTTP 401).
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, DNS failure or unusable API URL.
    ConnectionError = 3,

    /// Repository or label not found (HTTP 404).
    NotFound = 4,

    /// Validation error - invalid or missing configuration, rejected input.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Permission denied - the token lacks access (HTTP 403).
    PermissionDenied = 6,

    /// Some label deletions or creations failed; the rest were applied.
    PartialFailure = 7,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::MissingAccessToken => ExitCode::ValidationError,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::InvalidResponse(_) => ExitCode::GeneralError,

            ClientError::ApiError { status: 401, .. } => ExitCode::AuthenticationFailed,
            ClientError::ApiError { status: 403, .. } => ExitCode::PermissionDenied,
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,
            ClientError::ApiError {
                status: 400 | 422, ..
            } => ExitCode::ValidationError,
            ClientError::ApiError { .. } => ExitCode::GeneralError,

            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }
        }
    }
}

/// Errors raised by the CLI itself.
#[derive(Debug, Error)]
pub enum CliError {
    /// A value required by a command was neither passed nor configured.
    #[error("Missing required setting '{setting}': pass {flag} or set {var}")]
    MissingSetting {
        setting: &'static str,
        flag: &'static str,
        var: String,
    },

    /// Label sync finished but some operations failed.
    #[error("{failed} of {attempted} label operations failed")]
    PartialSync { failed: usize, attempted: usize },

    /// A dotted config key was empty or had an empty segment.
    #[error("Invalid config key '{0}': expected dot-separated names like labels.default_color")]
    InvalidConfigKey(String),

    /// The YAML config file exists but cannot be safely rewritten.
    #[error("Refusing to overwrite config file at {path}: {reason}")]
    UnwritableConfig { path: String, reason: String },

    /// `config_path` resolved to an empty path.
    #[error("No config file path is configured")]
    NoConfigPath,
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::PartialSync { .. } => ExitCode::PartialFailure,
            CliError::MissingSetting { .. }
            | CliError::InvalidConfigKey(_)
            | CliError::UnwritableConfig { .. }
            | CliError::NoConfigPath => ExitCode::ValidationError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error type is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<CliError>() {
                return ExitCode::from(err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ValidationError;
            }
        }

        ExitCode::GeneralError
    }
}
