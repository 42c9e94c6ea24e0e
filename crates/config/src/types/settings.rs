//! The long-lived settings object.
//!
//! Responsibilities:
//! - Hold every resolved setting, including the YAML-sourced `config` document.
//! - Assign raw string values to fields through the static field table.
//! - Resolve `config_path` against `root_path`.
//!
//! Does NOT handle:
//! - Deciding which source wins (see `SettingsLoader`).
//!
//! Invariants:
//! - Constructed once at startup and passed by reference to consumers.
//! - Secrets are never rendered by `Debug` or by `RedactedSettings`.

use std::path::{Path, PathBuf};

use secrecy::SecretString;
use serde::Serialize;
use serde_yaml::{Mapping, Value};

use super::fields::{FieldSpec, parse_flag};
use crate::constants::{
    DEFAULT_CONFIG_PATH, DEFAULT_GITHUB_API_URL, DEFAULT_PROXY_ROOT, DEFAULT_SECRET_KEY,
};
use crate::loader::{ConfigError, EnvSources};

const REDACTED: &str = "<redacted>";

/// Application settings resolved from all configuration layers.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path of the YAML configuration file. Absolute after loading.
    pub config_path: PathBuf,
    pub debug: bool,
    /// Report planned label changes without applying them.
    pub dry_run: bool,
    pub env_file: PathBuf,
    pub env_file_encoding: String,
    pub env_secrets_dir: Option<PathBuf>,
    pub github_access_token: Option<SecretString>,
    pub github_api_url: String,
    pub github_source_repository: Option<String>,
    pub github_target_repository: Option<String>,
    pub github_username: Option<String>,
    pub proxy_root: String,
    /// Application root; relative `config_path` values resolve against it.
    pub root_path: PathBuf,
    pub salt: Option<SecretString>,
    pub secret_key: SecretString,
    pub version: String,
    /// Structured configuration loaded from the YAML file, if any.
    pub config: Option<Value>,
}

impl Settings {
    /// Compiled-in defaults for the given bootstrap version, root and env sources.
    pub fn defaults(version: &str, root_path: &Path, sources: &EnvSources) -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            debug: false,
            dry_run: false,
            env_file: sources.env_file.clone(),
            env_file_encoding: sources.env_file_encoding.clone(),
            env_secrets_dir: sources.secrets_dir.clone(),
            github_access_token: None,
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            github_source_repository: None,
            github_target_repository: None,
            github_username: None,
            proxy_root: DEFAULT_PROXY_ROOT.to_string(),
            root_path: root_path.to_path_buf(),
            salt: None,
            secret_key: SecretString::new(DEFAULT_SECRET_KEY.into()),
            version: version.to_string(),
            config: None,
        }
    }

    /// The YAML config path, resolved against `root_path` when relative.
    pub fn resolved_config_path(&self) -> PathBuf {
        if self.config_path.as_os_str().is_empty() || self.config_path.is_absolute() {
            self.config_path.clone()
        } else {
            self.root_path.join(&self.config_path)
        }
    }

    /// Whether the secret key is still the shipped placeholder.
    pub fn is_using_default_secret_key(&self) -> bool {
        use secrecy::ExposeSecret;
        self.secret_key.expose_secret() == DEFAULT_SECRET_KEY
    }

    /// A serializable view with secrets replaced by a placeholder.
    pub fn redacted(&self) -> RedactedSettings<'_> {
        let mask = |secret: &Option<SecretString>| secret.as_ref().map(|_| REDACTED);
        RedactedSettings {
            config_path: &self.config_path,
            debug: self.debug,
            dry_run: self.dry_run,
            env_file: &self.env_file,
            env_file_encoding: &self.env_file_encoding,
            env_secrets_dir: self.env_secrets_dir.as_deref(),
            github_access_token: mask(&self.github_access_token),
            github_api_url: &self.github_api_url,
            github_source_repository: self.github_source_repository.as_deref(),
            github_target_repository: self.github_target_repository.as_deref(),
            github_username: self.github_username.as_deref(),
            proxy_root: &self.proxy_root,
            root_path: &self.root_path,
            salt: mask(&self.salt),
            secret_key: REDACTED,
            version: &self.version,
            config: self.config.as_ref(),
        }
    }

    /// Assign a raw value to the field described by `spec`.
    ///
    /// `var` names the source (variable or file) for error messages.
    pub(crate) fn assign(
        &mut self,
        spec: &FieldSpec,
        raw: &str,
        var: &str,
    ) -> Result<(), ConfigError> {
        let value = raw.trim();
        let optional = |v: &str| (!v.is_empty()).then(|| v.to_string());

        match spec.name {
            "config_path" => self.config_path = PathBuf::from(value),
            "debug" => self.debug = parse_flag(var, value)?,
            "dry_run" => self.dry_run = parse_flag(var, value)?,
            "env_file" => self.env_file = PathBuf::from(value),
            "env_file_encoding" => self.env_file_encoding = value.to_string(),
            "env_secrets_dir" => self.env_secrets_dir = optional(value).map(PathBuf::from),
            "github_access_token" => {
                self.github_access_token = optional(value).map(|v| SecretString::new(v.into()))
            }
            "github_api_url" => self.github_api_url = value.to_string(),
            "github_source_repository" => self.github_source_repository = optional(value),
            "github_target_repository" => self.github_target_repository = optional(value),
            "github_username" => self.github_username = optional(value),
            "proxy_root" => self.proxy_root = value.to_string(),
            "root_path" => self.root_path = PathBuf::from(value),
            "salt" => self.salt = optional(value).map(|v| SecretString::new(v.into())),
            "secret_key" => self.secret_key = SecretString::new(value.into()),
            "version" => self.version = value.to_string(),
            "config" => {
                let parsed: Value =
                    serde_yaml::from_str(value).map_err(|e| ConfigError::InvalidValue {
                        var: var.to_string(),
                        message: format!("must be a YAML or JSON document: {e}"),
                    })?;
                self.config = match parsed {
                    Value::Null => None,
                    other => Some(other),
                };
            }
            name => {
                tracing::debug!(field = name, "Field has no assignment rule");
            }
        }
        Ok(())
    }

    /// Set a nested string value inside `config`, creating mappings as needed.
    ///
    /// A `config` that is absent or not a mapping is replaced by a mapping.
    pub(crate) fn set_nested_config(&mut self, path: &[&str], raw: &str) {
        let Some((last, parents)) = path.split_last() else {
            return;
        };

        let mut node = self
            .config
            .get_or_insert_with(|| Value::Mapping(Mapping::new()));
        for key in parents {
            node = child_mapping(node).entry(Value::from(*key)).or_insert(Value::Null);
        }
        child_mapping(node).insert(Value::from(*last), Value::from(raw));
    }
}

fn child_mapping(node: &mut Value) -> &mut Mapping {
    if !node.is_mapping() {
        *node = Value::Mapping(Mapping::new());
    }
    match node {
        Value::Mapping(map) => map,
        _ => unreachable!("node was just replaced with a mapping"),
    }
}

/// Serializable settings view with secrets masked.
#[derive(Debug, Serialize)]
pub struct RedactedSettings<'a> {
    pub config_path: &'a Path,
    pub debug: bool,
    pub dry_run: bool,
    pub env_file: &'a Path,
    pub env_file_encoding: &'a str,
    pub env_secrets_dir: Option<&'a Path>,
    pub github_access_token: Option<&'static str>,
    pub github_api_url: &'a str,
    pub github_source_repository: Option<&'a str>,
    pub github_target_repository: Option<&'a str>,
    pub github_username: Option<&'a str>,
    pub proxy_root: &'a str,
    pub root_path: &'a Path,
    pub salt: Option<&'static str>,
    pub secret_key: &'static str,
    pub version: &'a str,
    pub config: Option<&'a Value>,
}
