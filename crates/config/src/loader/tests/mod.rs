//! Tests for the settings loader builder.
//!
//! Responsibilities:
//! - Test layer precedence across defaults, env file, secrets and environment.
//! - Test YAML config resolution, tolerated failures and the save round-trip.
//! - Test loading from the live process environment.
//!
//! Does NOT handle:
//! - Env file parsing details (tested in dotenv.rs).
//! - Secrets file naming (tested in secrets.rs).
//!
//! Invariants:
//! - Tests inject an `Environment` snapshot unless they exercise the process environment.
//! - Process environment tests use `serial_test` and `global_test_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::Path;
use std::sync::Mutex;

use crate::environment::Environment;
use crate::loader::builder::SettingsLoader;
use crate::test_util::bootstrap;

pub mod layering_tests;
pub mod process_env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// A loader rooted at `root` whose env file lives in `root` (and may not exist),
/// reading variables only from `pairs`.
pub fn hermetic_loader<const N: usize>(root: &Path, pairs: [(&str, &str); N]) -> SettingsLoader {
    SettingsLoader::new(bootstrap(), root)
        .with_env_file(root.join("gitlabel.env"))
        .with_environment(Environment::from_pairs(pairs))
}
