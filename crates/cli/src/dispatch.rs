//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Settings loading (see `main()`).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::config_context::ConfigCommandContext;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli, ctx: &ConfigCommandContext) -> Result<()> {
    match cli.command {
        Commands::Run(args) => commands::run::run(args, ctx).await,
        Commands::Config { command } => commands::config::run(command, ctx),
    }
}
