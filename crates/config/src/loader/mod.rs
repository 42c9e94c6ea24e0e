//! Layered settings loader.
//!
//! Responsibilities:
//! - Resolve where the env file, its encoding and the secrets directory come from.
//! - Merge, in increasing precedence: compiled-in defaults, the env file, the
//!   secrets directory, process environment variables and the YAML file.
//! - Provide a builder-pattern `SettingsLoader`.
//!
//! Does NOT handle:
//! - Reading the bootstrap file (see `bootstrap.rs`).
//! - Persisting configuration changes back to disk (see `persistence`).
//!
//! Invariants / Assumptions:
//! - Later layers overwrite matching keys; only the YAML document replaces
//!   `config` as a whole.
//! - The loader reads the injected `Environment` snapshot, never the live
//!   process environment.

mod builder;
mod dotenv;
mod env;
mod error;
mod secrets;
mod yaml;

pub use builder::SettingsLoader;
pub use env::{EnvSourceOverrides, EnvSources};
pub use error::ConfigError;
pub use yaml::{ConfigFileOutcome, read_config_file};

#[cfg(test)]
mod tests;
