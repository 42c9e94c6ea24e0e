//! Shared test utilities for gitlabel CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic application root with its own bootstrap file.
//! - Build `gitlabel` commands that see only the variables a test sets.
//!
//! Invariants / Assumptions:
//! - The process environment is cleared for every command, so host
//!   `GITLABEL_*` variables and `RUST_LOG` never leak into a test.
//! - The env file and YAML config live inside the temporary root.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Token passed to the binary in tests that talk to a mock server.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "ghp_test_token";

/// A temporary application root.
pub struct TestApp {
    root: TempDir,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Self {
        let root = TempDir::new().expect("temp dir");
        std::fs::write(
            root.path().join("config.txt"),
            "name=gitlabel\nvar_prefix=GITLABEL\nversion=1.0\n",
        )
        .expect("write bootstrap file");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn config_file(&self) -> PathBuf {
        self.root().join("config.yml")
    }

    /// Write `name` under the root, replacing any existing file.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root().join(name);
        std::fs::write(&path, contents).expect("write test file");
        path
    }

    /// A hermetic `gitlabel` command rooted at this app.
    pub fn cmd(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("gitlabel");
        cmd.env_clear()
            .arg("--root-path")
            .arg(self.root())
            .env("GITLABEL_ENV_FILE", self.root().join("gitlabel.env"))
            .env("GITLABEL_CONFIG_PATH", "config.yml");
        cmd
    }

    /// A `gitlabel run` command against `api_url` with every required setting.
    pub fn run_cmd(&self, api_url: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.env("GITLABEL_GITHUB_API_URL", api_url)
            .env("GITLABEL_GITHUB_USERNAME", "octocat")
            .env("GITLABEL_GITHUB_SOURCE_REPOSITORY", "source")
            .env("GITLABEL_GITHUB_TARGET_REPOSITORY", "target")
            .env("GITLABEL_GITHUB_ACCESS_TOKEN", TEST_TOKEN)
            .arg("run");
        cmd
    }
}

/// Labels as returned by `GET /repos/{owner}/{repo}/labels`.
#[allow(dead_code)]
pub fn labels_json(names: &[&str]) -> serde_json::Value {
    serde_json::Value::Array(
        names
            .iter()
            .map(|name| {
                serde_json::json!({
                    "id": 1,
                    "name": name,
                    "color": "ededed",
                    "description": null,
                    "default": false
                })
            })
            .collect(),
    )
}
