//! Settings loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `SettingsLoader` over a parsed bootstrap file.
//! - Layer defaults, env file, secrets directory, environment variables and
//!   the YAML file into the final `Settings`.
//! - Accept env sources resolved (and exported) by the caller.
//!
//! Does NOT handle:
//! - Env file parsing (see dotenv.rs), secrets file naming (see secrets.rs),
//!   or YAML failure classification (see yaml.rs).
//! - Writing resolved sources back to the process environment
//!   (see `EnvSources::export`).
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over `<PREFIX>_ENV_*` variables.
//! - The env file, secrets and environment layers are merged as raw strings
//!   before any value is parsed.
//! - The resolved env sources are authoritative for `env_file`,
//!   `env_file_encoding` and `env_secrets_dir` in the returned settings.
//! - After `load`, `config_path` is absolute unless it is empty.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use super::dotenv::read_env_file;
use super::env::{EnvSourceOverrides, EnvSources, RawValues};
use super::error::ConfigError;
use super::secrets::read_secrets;
use super::yaml::{ConfigFileOutcome, read_config_file};
use crate::bootstrap::BootstrapConfig;
use crate::environment::Environment;
use crate::types::Settings;

/// Loader that builds `Settings` from the bootstrap file and all layers.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    bootstrap: BootstrapConfig,
    root_path: PathBuf,
    overrides: EnvSourceOverrides,
    environment: Option<Environment>,
}

impl SettingsLoader {
    /// Create a loader for the application rooted at `root_path`.
    pub fn new(bootstrap: BootstrapConfig, root_path: impl Into<PathBuf>) -> Self {
        Self {
            bootstrap,
            root_path: root_path.into(),
            overrides: EnvSourceOverrides::default(),
            environment: None,
        }
    }

    /// Use this env file instead of `<PREFIX>_ENV_FILE` or the default.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.overrides.env_file = Some(path.into());
        self
    }

    /// Use this env file encoding instead of `<PREFIX>_ENV_FILE_ENCODING` or UTF-8.
    pub fn with_env_file_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.overrides.env_file_encoding = Some(encoding.into());
        self
    }

    /// Use this secrets directory instead of `<PREFIX>_ENV_SECRETS_DIR`.
    pub fn with_secrets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.overrides.secrets_dir = Some(dir.into());
        self
    }

    /// Read variables from this snapshot instead of the process environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Application root used for relative `config_path` values.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Variable prefix from the bootstrap file.
    pub fn var_prefix(&self) -> Result<&str, ConfigError> {
        self.bootstrap.var_prefix()
    }

    /// Resolve the env file, its encoding and the secrets directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingBootstrapKey` if `name` or `var_prefix`
    /// is absent from the bootstrap file.
    pub fn resolve_sources(&self) -> Result<EnvSources, ConfigError> {
        let prefix = self.bootstrap.var_prefix()?;
        let name = self.bootstrap.name()?;
        Ok(EnvSources::resolve(
            &self.overrides,
            prefix,
            name,
            &self.environment(),
        ))
    }

    /// Build the final settings, resolving the env sources first.
    ///
    /// # Errors
    ///
    /// Returns an error if a bootstrap key is missing, or for any failure
    /// listed on [`SettingsLoader::load_with_sources`].
    pub fn load(self) -> Result<Settings, ConfigError> {
        let sources = self.resolve_sources()?;
        self.load_with_sources(sources)
    }

    /// Build the final settings from already resolved env sources.
    ///
    /// The overrides given to this loader are not consulted again.
    ///
    /// # Errors
    ///
    /// Returns an error if a bootstrap key is missing, the env file exists but
    /// cannot be read or decoded, a secrets file cannot be read, the merged
    /// value of a flag or structured field is invalid, or the YAML file fails
    /// with an I/O error other than the tolerated ones.
    ///
    /// SAFETY: Error messages never include raw values to prevent secret leakage.
    pub fn load_with_sources(self, sources: EnvSources) -> Result<Settings, ConfigError> {
        let prefix = self.bootstrap.var_prefix()?;
        let version = self.bootstrap.version()?;
        let environment = self.environment();

        let mut settings = Settings::defaults(version, &self.root_path, &sources);
        let mut raw = RawValues::default();

        let env_file_pairs = read_env_file(&sources.env_file, &sources.env_file_encoding)?;
        raw.collect_prefixed(
            prefix,
            env_file_pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        );

        if let Some(dir) = &sources.secrets_dir {
            for (spec, value) in read_secrets(dir, prefix)? {
                raw.set(spec, &value, dir.join(spec.name).display().to_string());
            }
        }

        raw.collect_prefixed(prefix, environment.iter());
        raw.apply(&mut settings)?;

        settings.env_file = sources.env_file;
        settings.env_file_encoding = sources.env_file_encoding;
        settings.env_secrets_dir = sources.secrets_dir;

        settings.config_path = settings.resolved_config_path();
        if settings.config_path.as_os_str().is_empty() {
            tracing::debug!("config_path is empty, skipping YAML config");
        } else {
            apply_config_file(&mut settings)?;
        }

        tracing::debug!(
            config_path = %settings.config_path.display(),
            debug = settings.debug,
            dry_run = settings.dry_run,
            "Settings loaded"
        );
        Ok(settings)
    }

    fn environment(&self) -> Cow<'_, Environment> {
        match &self.environment {
            Some(env) => Cow::Borrowed(env),
            None => Cow::Owned(Environment::from_process()),
        }
    }
}

/// Replace `settings.config` with the YAML document, keeping the prior value
/// on tolerated failures.
fn apply_config_file(settings: &mut Settings) -> Result<(), ConfigError> {
    let path = &settings.config_path;
    match read_config_file(path)? {
        ConfigFileOutcome::Loaded(Value::Null) => {
            tracing::debug!(path = %path.display(), "YAML config is empty");
            settings.config = None;
        }
        ConfigFileOutcome::Loaded(value) => {
            tracing::debug!(path = %path.display(), "Loaded YAML config");
            settings.config = Some(value);
        }
        ConfigFileOutcome::NotFound => {
            tracing::debug!(path = %path.display(), "No YAML config found");
        }
        ConfigFileOutcome::Unreadable { kind } => {
            tracing::warn!(path = %path.display(), %kind, "Cannot read YAML config, skipping");
        }
        ConfigFileOutcome::Malformed { message } => {
            tracing::warn!(path = %path.display(), error = %message, "Malformed YAML config, skipping");
        }
    }
    Ok(())
}
