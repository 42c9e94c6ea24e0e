//! Configuration management for gitlabel.
//!
//! This crate provides the layered settings loader used by the gitlabel CLI:
//! a bootstrap `key=value` file, an optional `.env` file, an optional secrets
//! directory, process environment variables and an optional YAML file.

pub mod bootstrap;
pub mod constants;
pub mod environment;
mod loader;
pub mod persistence;
pub mod types;

pub use bootstrap::BootstrapConfig;
pub use environment::Environment;
pub use loader::{
    ConfigError, ConfigFileOutcome, EnvSourceOverrides, EnvSources, SettingsLoader,
    read_config_file,
};
pub use persistence::save_config;
pub use types::{FIELDS, FieldKind, FieldSpec, RedactedSettings, Settings};
