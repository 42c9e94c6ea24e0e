//! gitlabel - copy issue labels between GitHub repositories.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Load layered settings and hand them to the command handlers.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - GitHub API calls or the sync algorithm (see `crates/client`).
//! - Settings layering rules (see `crates/config`).
//!
//! Invariants:
//! - Resolved env sources are exported to the process environment before the
//!   async runtime starts, while the process is still single-threaded.
//! - Errors are printed to stderr once, with their full context chain.

mod args;
mod commands;
mod config_context;
mod dispatch;
mod error;
mod logging;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use config_context::ConfigCommandContext;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use gitlabel_config::constants::BOOTSTRAP_FILE_NAME;
use gitlabel_config::{BootstrapConfig, SettingsLoader};
use logging::LogControl;

fn main() {
    let cli = Cli::parse();
    let log = LogControl::init();

    let exit_code = match run(cli, &log) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: Cli, log: &LogControl) -> Result<()> {
    let root = match &cli.root_path {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let bootstrap = BootstrapConfig::load(root.join(BOOTSTRAP_FILE_NAME))?;
    let mut loader = SettingsLoader::new(bootstrap, &root);
    if let Some(path) = &cli.env_file {
        loader = loader.with_env_file(path);
    }
    if let Some(encoding) = &cli.env_file_encoding {
        loader = loader.with_env_file_encoding(encoding);
    }
    if let Some(dir) = &cli.secrets_dir {
        loader = loader.with_secrets_dir(dir);
    }

    let var_prefix = loader.var_prefix()?.to_string();
    let sources = loader.resolve_sources()?;
    // SAFETY: no other thread exists yet; the tokio runtime is built below.
    unsafe { sources.export(&var_prefix) };

    let settings = loader.load_with_sources(sources)?;
    if settings.debug {
        log.enable_debug();
    }
    if settings.is_using_default_secret_key() {
        tracing::debug!("Using the built-in default secret_key");
    }

    let ctx = ConfigCommandContext::new(settings, var_prefix);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(run_command(cli, &ctx))
}
