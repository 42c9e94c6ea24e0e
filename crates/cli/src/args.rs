//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Carry the env source overrides used to load settings.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read environment variables; settings come from the loader.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "gitlabel")]
#[command(about = "Copy issue labels from one GitHub repository to another", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  gitlabel run -u octocat --source-repository template --target-repository new-project\n  gitlabel run --dry-run\n  gitlabel --env-file ./gitlabel.env config show\n  gitlabel config set labels.default_color ededed\n"
)]
pub struct Cli {
    /// Application root containing config.txt (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root_path: Option<PathBuf>,

    /// Env file to load settings from (overrides <PREFIX>_ENV_FILE)
    #[arg(long, global = true, value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Text encoding of the env file, e.g. UTF-8 or latin-1
    #[arg(long, global = true, value_name = "ENCODING")]
    pub env_file_encoding: Option<String>,

    /// Directory with one secret value per file (overrides <PREFIX>_ENV_SECRETS_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub secrets_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replace the target repository's labels with the source repository's labels
    Run(RunArgs),

    /// Inspect and edit the YAML configuration
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommand,
    },
}

/// Options for `run`; each falls back to the loaded settings.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// GitHub user or organization that owns both repositories
    #[arg(short = 'u', long)]
    pub username: Option<String>,

    /// Repository to read labels from
    #[arg(short = 's', long)]
    pub source_repository: Option<String>,

    /// Repository whose labels are replaced
    #[arg(short = 't', long)]
    pub target_repository: Option<String>,

    /// GitHub access token
    #[arg(short = 'a', long)]
    pub access_token: Option<String>,

    /// Show what would change without deleting or creating labels
    #[arg(long)]
    pub dry_run: bool,
}
