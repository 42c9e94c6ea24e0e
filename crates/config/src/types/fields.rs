//! Static table of assignable settings fields.
//!
//! Responsibilities:
//! - List every field that an env file, secrets directory or environment
//!   variable may set, together with how its raw string value is parsed.
//! - Parse boolean flags.
//!
//! Does NOT handle:
//! - Default values (see `Settings::defaults`).
//! - Prefix stripping or nested-key splitting (see `loader::env`).

use crate::loader::ConfigError;

/// How a raw string value is converted for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain string.
    Text,
    /// String; blank values clear the field.
    OptionalText,
    /// Boolean flag.
    Flag,
    /// Filesystem path.
    Path,
    /// Filesystem path; blank values clear the field.
    OptionalPath,
    /// Secret string.
    Secret,
    /// Secret string; blank values clear the field.
    OptionalSecret,
    /// YAML/JSON document, also addressable through nested keys.
    Structured,
}

/// One entry of the field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, lower-case. The variable suffix is the upper-cased name.
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    /// Look up a field by name (case-insensitive).
    pub fn lookup(name: &str) -> Option<&'static FieldSpec> {
        FIELDS.iter().find(|spec| spec.name.eq_ignore_ascii_case(name))
    }

    /// The variable name for this field under `prefix`, e.g. `GITLABEL_DEBUG`.
    pub fn var_name(&self, prefix: &str) -> String {
        format!("{}_{}", prefix, self.name.to_uppercase())
    }
}

/// Every assignable field of `Settings`.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("config_path", FieldKind::Path),
    FieldSpec::new("debug", FieldKind::Flag),
    FieldSpec::new("dry_run", FieldKind::Flag),
    FieldSpec::new("env_file", FieldKind::Path),
    FieldSpec::new("env_file_encoding", FieldKind::Text),
    FieldSpec::new("env_secrets_dir", FieldKind::OptionalPath),
    FieldSpec::new("github_access_token", FieldKind::OptionalSecret),
    FieldSpec::new("github_api_url", FieldKind::Text),
    FieldSpec::new("github_source_repository", FieldKind::OptionalText),
    FieldSpec::new("github_target_repository", FieldKind::OptionalText),
    FieldSpec::new("github_username", FieldKind::OptionalText),
    FieldSpec::new("proxy_root", FieldKind::Text),
    FieldSpec::new("root_path", FieldKind::Path),
    FieldSpec::new("salt", FieldKind::OptionalSecret),
    FieldSpec::new("secret_key", FieldKind::Secret),
    FieldSpec::new("version", FieldKind::Text),
    FieldSpec::new("config", FieldKind::Structured),
];

/// Parse a boolean flag value.
///
/// Accepts (case-insensitive) `1/0`, `true/false`, `t/f`, `yes/no`, `y/n`, `on/off`.
pub fn parse_flag(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}
