//! Environment variable handling for settings.
//!
//! Responsibilities:
//! - Resolve the env file path, its encoding and the secrets directory from
//!   explicit overrides, `<PREFIX>_ENV_*` variables and built-in defaults.
//! - Collect `<PREFIX>_<FIELD>[__<KEY>...]` variables as raw values and
//!   parse the merged result into `Settings`.
//!
//! Does NOT handle:
//! - Reading the env file itself (see dotenv.rs).
//! - Building the final `Settings` (see builder.rs).
//!
//! Invariants:
//! - Precedence for each control value: override, then environment, then default.
//! - An invalid secrets directory is dropped with a warning, never an error.
//! - Variable names are matched case-insensitively against the prefix and fields.
//! - Only the winning raw value of a field is parsed, so an invalid value in a
//!   lower layer is harmless once a higher layer overrides it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use crate::constants::{
    DEFAULT_ENV_FILE_ENCODING, ENV_FILE_ENCODING_SUFFIX, ENV_FILE_SUFFIX, ENV_SECRETS_DIR_SUFFIX,
    NESTED_DELIMITER,
};
use crate::environment::Environment;
use crate::types::{FieldKind, FieldSpec, Settings};

/// Explicit values that take precedence over the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSourceOverrides {
    pub env_file: Option<PathBuf>,
    pub env_file_encoding: Option<String>,
    pub secrets_dir: Option<PathBuf>,
}

/// Where the env file and secrets come from for one load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSources {
    pub env_file: PathBuf,
    pub env_file_encoding: String,
    /// Validated secrets directory, if any.
    pub secrets_dir: Option<PathBuf>,
}

impl EnvSources {
    /// Resolve each control value independently.
    pub fn resolve(
        overrides: &EnvSourceOverrides,
        prefix: &str,
        app_name: &str,
        env: &Environment,
    ) -> Self {
        let env_file = overrides
            .env_file
            .clone()
            .or_else(|| env.non_empty(&control_var(prefix, ENV_FILE_SUFFIX)).map(PathBuf::from))
            .unwrap_or_else(|| default_env_file(app_name));

        let env_file_encoding = overrides
            .env_file_encoding
            .clone()
            .or_else(|| env.non_empty(&control_var(prefix, ENV_FILE_ENCODING_SUFFIX)))
            .unwrap_or_else(|| DEFAULT_ENV_FILE_ENCODING.to_string());

        let secrets_dir = overrides
            .secrets_dir
            .clone()
            .or_else(|| {
                env.non_empty(&control_var(prefix, ENV_SECRETS_DIR_SUFFIX))
                    .map(PathBuf::from)
            })
            .filter(|dir| validate_secrets_dir(dir));

        Self {
            env_file,
            env_file_encoding,
            secrets_dir,
        }
    }

    /// Write the resolved values back into the process environment so that
    /// child processes and later loads observe the same sources.
    ///
    /// # Safety
    ///
    /// Calls [`std::env::set_var`]. No other thread may read or write the
    /// process environment while this runs; in practice it must be called
    /// before any other thread (including an async runtime) is started.
    pub unsafe fn export(&self, prefix: &str) {
        let mut vars = vec![
            (
                control_var(prefix, ENV_FILE_SUFFIX),
                self.env_file.as_os_str().to_os_string(),
            ),
            (
                control_var(prefix, ENV_FILE_ENCODING_SUFFIX),
                self.env_file_encoding.clone().into(),
            ),
        ];
        if let Some(dir) = &self.secrets_dir {
            vars.push((
                control_var(prefix, ENV_SECRETS_DIR_SUFFIX),
                dir.as_os_str().to_os_string(),
            ));
        }

        for (key, value) in vars {
            // SAFETY: upheld by the caller per this function's contract.
            unsafe {
                std::env::set_var(&key, &value);
            }
        }
    }
}

/// `<PREFIX>_<SUFFIX>`.
fn control_var(prefix: &str, suffix: &str) -> String {
    format!("{prefix}_{suffix}")
}

/// `/etc/<name>/<name>.env`.
pub(crate) fn default_env_file(app_name: &str) -> PathBuf {
    Path::new("/etc")
        .join(app_name)
        .join(format!("{app_name}.env"))
}

fn validate_secrets_dir(dir: &Path) -> bool {
    if !dir.exists() {
        tracing::warn!(
            path = %dir.display(),
            "The given secrets directory does not exist, skipping secrets"
        );
        false
    } else if !dir.is_dir() {
        tracing::warn!(
            path = %dir.display(),
            "The given secrets directory is not a directory, skipping secrets"
        );
        false
    } else {
        true
    }
}

/// Raw string values gathered from every layer, parsed only once all layers
/// have been merged.
#[derive(Debug, Default)]
pub(crate) struct RawValues {
    fields: BTreeMap<&'static str, RawValue>,
    nested: Vec<(Vec<String>, String)>,
}

#[derive(Debug)]
struct RawValue {
    spec: &'static FieldSpec,
    value: String,
    source: String,
}

impl RawValues {
    /// Record `value` for `spec`, replacing any value from an earlier layer.
    pub(crate) fn set(&mut self, spec: &'static FieldSpec, value: &str, source: impl Into<String>) {
        self.fields.insert(
            spec.name,
            RawValue {
                spec,
                value: value.to_string(),
                source: source.into(),
            },
        );
    }

    /// Record `<PREFIX>_<FIELD>` variables.
    ///
    /// A remainder containing `__` addresses a nested key of a structured field.
    /// Unknown names are ignored.
    pub(crate) fn collect_prefixed<'a, I>(&mut self, prefix: &str, vars: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let prefix = format!("{}_", prefix.to_lowercase());

        for (name, value) in vars {
            let lowered = name.to_lowercase();
            let Some(rest) = lowered.strip_prefix(&prefix) else {
                continue;
            };

            let mut segments = rest.split(NESTED_DELIMITER);
            let Some(spec) = segments.next().and_then(FieldSpec::lookup) else {
                continue;
            };
            let nested: Vec<String> = segments.map(str::to_string).collect();

            if nested.is_empty() {
                self.set(spec, value, name);
            } else if spec.kind == FieldKind::Structured {
                self.nested.push((nested, value.to_string()));
            } else {
                tracing::debug!(var = name, "Ignoring nested key on a scalar setting");
            }
        }
    }

    /// Parse the winning value of each field into `settings`, then apply
    /// nested `config` keys in the order they were seen.
    pub(crate) fn apply(self, settings: &mut Settings) -> Result<(), ConfigError> {
        for raw in self.fields.values() {
            settings.assign(raw.spec, &raw.value, &raw.source)?;
        }
        for (path, value) in &self.nested {
            let path: Vec<&str> = path.iter().map(String::as_str).collect();
            settings.set_nested_config(&path, value);
        }
        Ok(())
    }
}
