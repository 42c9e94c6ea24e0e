//! Centralized default values for gitlabel settings.
//!
//! Responsibilities:
//! - Define compiled-in defaults for every settings field that has one.
//! - Define the file names and suffixes shared by the loader and the CLI.
//!
//! Does NOT handle:
//! - Values derived from the bootstrap file (name, prefix, version).
//! - Default paths that depend on the application name (see `EnvSources`).

/// Name of the bootstrap file expected at the application root.
pub const BOOTSTRAP_FILE_NAME: &str = "config.txt";

/// Default location of the YAML configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/gitlabel/config.yml";

/// Default text encoding of the environment file.
pub const DEFAULT_ENV_FILE_ENCODING: &str = "UTF-8";

/// Default GitHub REST API root.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Default proxy root for generated links.
pub const DEFAULT_PROXY_ROOT: &str = "/";

/// Placeholder secret key; deployments are expected to override it.
pub const DEFAULT_SECRET_KEY: &str = "INSECURE-CHANGE-ME-6up8zksTD6mi4N3z3zFk";

/// Separator between a field name and a nested key in variable names.
pub const NESTED_DELIMITER: &str = "__";

/// Suffix of the variable naming the environment file.
pub const ENV_FILE_SUFFIX: &str = "ENV_FILE";

/// Suffix of the variable naming the environment file encoding.
pub const ENV_FILE_ENCODING_SUFFIX: &str = "ENV_FILE_ENCODING";

/// Suffix of the variable naming the secrets directory.
pub const ENV_SECRETS_DIR_SUFFIX: &str = "ENV_SECRETS_DIR";
