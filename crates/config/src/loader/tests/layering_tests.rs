//! Layer precedence tests for the settings loader.

use std::path::PathBuf;

use secrecy::ExposeSecret;
use tempfile::TempDir;

use super::hermetic_loader;
use crate::bootstrap::BootstrapConfig;
use crate::loader::builder::SettingsLoader;
use crate::loader::error::ConfigError;
use crate::test_util::write_file;

#[test]
fn test_no_sources_yields_defaults() {
    let root = TempDir::new().unwrap();

    let settings = hermetic_loader(root.path(), [])
        .load()
        .unwrap();

    assert!(!settings.debug);
    assert!(!settings.dry_run);
    assert_eq!(settings.version, "1.0");
    assert_eq!(settings.root_path, root.path());
    assert_eq!(settings.env_file, root.path().join("gitlabel.env"));
    assert_eq!(settings.env_file_encoding, "UTF-8");
    assert!(settings.env_secrets_dir.is_none());
    assert_eq!(settings.github_api_url, "https://api.github.com");
    assert!(settings.github_access_token.is_none());
    assert!(settings.is_using_default_secret_key());
}

#[test]
fn test_debug_variable_with_bootstrap_version() {
    let root = TempDir::new().unwrap();

    let settings = hermetic_loader(
        root.path(),
        [
            ("GITLABEL_DEBUG", "true"),
            ("GITLABEL_CONFIG_PATH", "config.yml"),
        ],
    )
    .load()
    .unwrap();

    assert!(settings.debug);
    assert_eq!(settings.version, "1.0");
}

#[test]
fn test_prefix_is_case_insensitive() {
    let root = TempDir::new().unwrap();

    let settings = hermetic_loader(root.path(), [("gitlabel_github_username", "octocat")])
        .load()
        .unwrap();

    assert_eq!(settings.github_username.as_deref(), Some("octocat"));
}

#[test]
fn test_unrelated_variables_are_ignored() {
    let root = TempDir::new().unwrap();

    let settings = hermetic_loader(
        root.path(),
        [
            ("OTHER_DEBUG", "true"),
            ("GITLABEL_UNKNOWN_FIELD", "x"),
            ("GITLABEL", "x"),
        ],
    )
    .load()
    .unwrap();

    assert!(!settings.debug);
}

#[test]
fn test_env_file_overrides_defaults() {
    let root = TempDir::new().unwrap();
    write_file(
        root.path(),
        "gitlabel.env",
        "GITLABEL_GITHUB_SOURCE_REPOSITORY=octo/source\nGITLABEL_DRY_RUN=yes\n",
    );

    let settings = hermetic_loader(root.path(), []).load().unwrap();

    assert_eq!(
        settings.github_source_repository.as_deref(),
        Some("octo/source")
    );
    assert!(settings.dry_run);
}

#[test]
fn test_secrets_override_env_file() {
    let root = TempDir::new().unwrap();
    write_file(
        root.path(),
        "gitlabel.env",
        "GITLABEL_GITHUB_ACCESS_TOKEN=from-env-file\n",
    );
    write_file(root.path(), "secrets/github_access_token", "from-secrets\n");

    let settings = hermetic_loader(root.path(), [])
        .with_secrets_dir(root.path().join("secrets"))
        .load()
        .unwrap();

    assert_eq!(
        settings.github_access_token.unwrap().expose_secret(),
        "from-secrets"
    );
    assert_eq!(settings.env_secrets_dir, Some(root.path().join("secrets")));
}

#[test]
fn test_environment_overrides_secrets_and_env_file() {
    let root = TempDir::new().unwrap();
    write_file(root.path(), "gitlabel.env", "GITLABEL_SALT=from-env-file\n");
    write_file(root.path(), "secrets/salt", "from-secrets");

    let settings = hermetic_loader(root.path(), [("GITLABEL_SALT", "from-environment")])
        .with_secrets_dir(root.path().join("secrets"))
        .load()
        .unwrap();

    assert_eq!(settings.salt.unwrap().expose_secret(), "from-environment");
}

#[test]
fn test_missing_secrets_dir_is_skipped() {
    let root = TempDir::new().unwrap();

    let settings = hermetic_loader(root.path(), [])
        .with_secrets_dir(root.path().join("no-such-dir"))
        .load()
        .unwrap();

    assert!(settings.env_secrets_dir.is_none());
}

#[test]
fn test_env_sources_from_environment_are_used() {
    let root = TempDir::new().unwrap();
    let env_file = write_file(root.path(), "custom/app.env", "GITLABEL_GITHUB_USERNAME=octocat\n");
    let env_file = env_file.display().to_string();

    let settings = SettingsLoader::new(crate::test_util::bootstrap(), root.path())
        .with_environment(crate::environment::Environment::from_pairs([(
            "GITLABEL_ENV_FILE",
            env_file.as_str(),
        )]))
        .load()
        .unwrap();

    assert_eq!(settings.github_username.as_deref(), Some("octocat"));
    assert_eq!(settings.env_file, PathBuf::from(&env_file));
}

#[test]
fn test_builder_override_beats_environment_for_env_file() {
    let root = TempDir::new().unwrap();
    write_file(root.path(), "gitlabel.env", "GITLABEL_GITHUB_USERNAME=from-override\n");
    write_file(root.path(), "other.env", "GITLABEL_GITHUB_USERNAME=from-environment\n");
    let other = root.path().join("other.env").display().to_string();

    let settings = hermetic_loader(root.path(), [("GITLABEL_ENV_FILE", other.as_str())])
        .load()
        .unwrap();

    assert_eq!(settings.github_username.as_deref(), Some("from-override"));
    assert_eq!(settings.env_file, root.path().join("gitlabel.env"));
}

#[test]
fn test_nested_variables_populate_config() {
    let root = TempDir::new().unwrap();

    let settings = hermetic_loader(
        root.path(),
        [
            ("GITLABEL_CONFIG__LABELS__DEFAULT_COLOR", "ededed"),
            ("GITLABEL_CONFIG__OWNER", "octocat"),
        ],
    )
    .load()
    .unwrap();

    let expected: serde_yaml::Value =
        serde_yaml::from_str("labels:\n  default_color: ededed\nowner: octocat\n").unwrap();
    assert_eq!(settings.config, Some(expected));
}

#[test]
fn test_invalid_flag_is_error() {
    let root = TempDir::new().unwrap();

    let err = hermetic_loader(root.path(), [("GITLABEL_DEBUG", "sometimes")])
        .load()
        .unwrap_err();

    assert!(
        matches!(&err, ConfigError::InvalidValue { var, .. } if var == "GITLABEL_DEBUG"),
        "got {err}"
    );
}

#[test]
fn test_unknown_encoding_is_error_when_env_file_exists() {
    let root = TempDir::new().unwrap();
    write_file(root.path(), "gitlabel.env", "GITLABEL_DEBUG=true\n");

    let err = hermetic_loader(root.path(), [])
        .with_env_file_encoding("no-such-encoding")
        .load()
        .unwrap_err();

    assert!(matches!(err, ConfigError::UnsupportedEncoding(_)));
}

#[test]
fn test_missing_bootstrap_key_is_error() {
    let root = TempDir::new().unwrap();
    let bootstrap = BootstrapConfig::from_pairs([("name", "gitlabel"), ("version", "1.0")]);

    let err = SettingsLoader::new(bootstrap, root.path())
        .with_environment(crate::environment::Environment::default())
        .load()
        .unwrap_err();

    assert!(matches!(err, ConfigError::MissingBootstrapKey(key) if key == "var_prefix"));
}

#[test]
fn test_env_file_encoding_is_used_for_decoding() {
    let root = TempDir::new().unwrap();
    let mut bytes = b"GITLABEL_GITHUB_USERNAME=Ren".to_vec();
    bytes.extend_from_slice(&[0xE9, b'\n']);
    std::fs::write(root.path().join("gitlabel.env"), bytes).unwrap();

    let settings = hermetic_loader(root.path(), [])
        .with_env_file_encoding("latin-1")
        .load()
        .unwrap();

    assert_eq!(settings.github_username.as_deref(), Some("René"));
    assert_eq!(settings.env_file_encoding, "latin-1");
}

#[test]
fn test_malformed_env_file_line_keeps_other_values() {
    let root = TempDir::new().unwrap();
    write_file(
        root.path(),
        "gitlabel.env",
        "GITLABEL_GITHUB_USERNAME=octocat\nthis line is not a pair\n",
    );

    let settings = hermetic_loader(root.path(), []).load().unwrap();

    assert_eq!(settings.github_username.as_deref(), Some("octocat"));
}

#[test]
fn test_invalid_value_in_lower_layer_is_overridden() {
    let root = TempDir::new().unwrap();
    write_file(root.path(), "gitlabel.env", "GITLABEL_DEBUG=maybe\n");

    let settings = hermetic_loader(root.path(), [("GITLABEL_DEBUG", "true")])
        .load()
        .unwrap();

    assert!(settings.debug);
}

#[test]
fn test_invalid_value_in_winning_layer_is_error() {
    let root = TempDir::new().unwrap();
    write_file(root.path(), "gitlabel.env", "GITLABEL_DEBUG=true\n");
    write_file(root.path(), "secrets/debug", "maybe");

    let err = hermetic_loader(root.path(), [])
        .with_secrets_dir(root.path().join("secrets"))
        .load()
        .unwrap_err();

    assert!(
        matches!(&err, ConfigError::InvalidValue { var, .. } if var.ends_with("secrets/debug")),
        "got {err}"
    );
}

#[test]
fn test_nested_keys_apply_over_structured_value() {
    let root = TempDir::new().unwrap();
    write_file(
        root.path(),
        "gitlabel.env",
        "GITLABEL_CONFIG__LABELS__DEFAULT_COLOR=ededed\n",
    );

    let settings = hermetic_loader(root.path(), [("GITLABEL_CONFIG", "{owner: octocat}")])
        .load()
        .unwrap();

    let expected: serde_yaml::Value =
        serde_yaml::from_str("owner: octocat\nlabels:\n  default_color: ededed\n").unwrap();
    assert_eq!(settings.config, Some(expected));
}

#[test]
fn test_load_with_sources_uses_given_sources() {
    let root = TempDir::new().unwrap();
    write_file(root.path(), "gitlabel.env", "GITLABEL_GITHUB_USERNAME=from-override\n");
    let chosen = write_file(root.path(), "chosen.env", "GITLABEL_GITHUB_USERNAME=from-sources\n");

    let sources = crate::loader::EnvSources {
        env_file: chosen.clone(),
        env_file_encoding: "UTF-8".to_string(),
        secrets_dir: None,
    };
    let settings = hermetic_loader(root.path(), [])
        .load_with_sources(sources)
        .unwrap();

    assert_eq!(settings.github_username.as_deref(), Some("from-sources"));
    assert_eq!(settings.env_file, chosen);
}
