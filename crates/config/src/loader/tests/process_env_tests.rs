//! Process environment tests for the settings loader.
//!
//! Responsibilities:
//! - Test that a loader without an injected snapshot reads the live environment.
//! - Test that exported env sources are observed by a later load.

use serial_test::serial;
use tempfile::TempDir;

use super::env_lock;
use crate::loader::builder::SettingsLoader;
use crate::test_util::{bootstrap, write_file};

#[test]
#[serial]
fn test_loader_reads_process_environment() {
    let _lock = env_lock().lock().unwrap();
    let root = TempDir::new().unwrap();

    temp_env::with_vars(
        [
            ("GITLABEL_DEBUG", Some("true")),
            ("GITLABEL_CONFIG_PATH", Some("config.yml")),
            ("GITLABEL_ENV_SECRETS_DIR", None),
        ],
        || {
            let settings = SettingsLoader::new(bootstrap(), root.path())
                .with_env_file(root.path().join("gitlabel.env"))
                .load()
                .unwrap();

            assert!(settings.debug);
            assert_eq!(settings.version, "1.0");
        },
    );
}

#[test]
#[serial]
fn test_exported_sources_are_seen_by_next_load() {
    let _lock = env_lock().lock().unwrap();
    let root = TempDir::new().unwrap();
    let env_file = write_file(root.path(), "exported.env", "GITLABEL_GITHUB_USERNAME=octocat\n");

    temp_env::with_vars_unset(
        [
            "GITLABEL_ENV_FILE",
            "GITLABEL_ENV_FILE_ENCODING",
            "GITLABEL_ENV_SECRETS_DIR",
            "GITLABEL_GITHUB_USERNAME",
            "GITLABEL_CONFIG_PATH",
        ],
        || {
            let first = SettingsLoader::new(bootstrap(), root.path()).with_env_file(&env_file);
            let sources = first.resolve_sources().unwrap();
            // SAFETY: `#[serial]` and the global lock keep other environment
            // tests off this process.
            unsafe { sources.export("GITLABEL") };

            let settings = SettingsLoader::new(bootstrap(), root.path())
                .load()
                .unwrap();

            assert_eq!(settings.env_file, env_file);
            assert_eq!(settings.github_username.as_deref(), Some("octocat"));
        },
    );
}
