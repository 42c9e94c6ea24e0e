//! Config command implementation.
//!
//! Responsibilities:
//! - Print the loaded settings with secrets redacted.
//! - Print the resolved YAML config path.
//! - Set a dotted key in the YAML config file.
//!
//! Does NOT handle:
//! - Loading settings (see `gitlabel_config::SettingsLoader`).
//!
//! Invariants:
//! - `set` edits the file as it is on disk, not the merged `settings.config`,
//!   so values from environment variables are never written back.
//! - A config file that exists but cannot be read or parsed is never overwritten.

use anyhow::Result;
use clap::Subcommand;
use gitlabel_config::{ConfigFileOutcome, read_config_file, save_config};
use serde_yaml::{Mapping, Value};

use crate::config_context::ConfigCommandContext;
use crate::error::CliError;

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the loaded settings with secrets redacted
    Show,

    /// Print the resolved YAML config file path
    Path,

    /// Set a value in the YAML config file
    Set {
        /// Dotted key, e.g. labels.default_color
        key: String,

        /// Value; YAML scalars (numbers, booleans, null) are parsed, anything else is a string
        value: String,
    },
}

pub fn run(command: ConfigCommand, ctx: &ConfigCommandContext) -> Result<()> {
    let settings = &ctx.settings;
    match command {
        ConfigCommand::Show => {
            print!("{}", serde_yaml::to_string(&settings.redacted())?);
        }
        ConfigCommand::Path => {
            println!("{}", settings.config_path.display());
        }
        ConfigCommand::Set { key, value } => {
            if settings.config_path.as_os_str().is_empty() {
                return Err(CliError::NoConfigPath.into());
            }
            let segments = parse_key(&key)?;

            let mut document = match read_config_file(&settings.config_path)? {
                ConfigFileOutcome::Loaded(Value::Null) | ConfigFileOutcome::NotFound => {
                    Value::Mapping(Mapping::new())
                }
                ConfigFileOutcome::Loaded(value) => value,
                ConfigFileOutcome::Unreadable { kind } => {
                    return Err(CliError::UnwritableConfig {
                        path: settings.config_path.display().to_string(),
                        reason: kind.to_string(),
                    }
                    .into());
                }
                ConfigFileOutcome::Malformed { message } => {
                    return Err(CliError::UnwritableConfig {
                        path: settings.config_path.display().to_string(),
                        reason: message,
                    }
                    .into());
                }
            };

            set_path(&mut document, &segments, parse_value(&value));
            let path = save_config(settings, &document)?;
            tracing::info!(key = %key, "Updated config value");
            println!("Set {} in {}", key, path.display());
        }
    }
    Ok(())
}

fn parse_key(key: &str) -> Result<Vec<&str>, CliError> {
    let segments: Vec<&str> = key.split('.').map(str::trim).collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(CliError::InvalidConfigKey(key.to_string()));
    }
    Ok(segments)
}

/// Scalars parse as YAML; sequences, mappings and unparsable text stay strings.
fn parse_value(raw: &str) -> Value {
    match serde_yaml::from_str::<Value>(raw) {
        Ok(value @ (Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_))) => value,
        _ => Value::String(raw.to_string()),
    }
}

/// Set `segments` in `doc`, replacing any non-mapping value along the way.
fn set_path(doc: &mut Value, segments: &[&str], value: Value) {
    let Some((first, rest)) = segments.split_first() else {
        *doc = value;
        return;
    };
    if !doc.is_mapping() {
        *doc = Value::Mapping(Mapping::new());
    }
    let Value::Mapping(map) = doc else {
        return;
    };
    let key = Value::String((*first).to_string());
    if rest.is_empty() {
        map.insert(key, value);
        return;
    }
    let child = map
        .entry(key)
        .or_insert_with(|| Value::Mapping(Mapping::new()));
    set_path(child, rest, value);
}
