use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Environment variable holding an explicit path to the `wp` executable
pub const ENV_WP_BIN: &str = "WPCLI_BIN";

#[derive(Parser)]
#[command(name = "wpcli")]
#[command(author = "Alberto Cavalcante")]
#[command(version)]
#[command(about = "Ansible module for running WP-CLI commands idempotently", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Verbosity level (logs go to stderr)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the wp executable (skips the PATH search)
    #[arg(long, env = ENV_WP_BIN, global = true)]
    pub wp_bin: Option<PathBuf>,

    /// JSON arguments file written by the orchestrator ("-" or omitted reads stdin)
    pub args_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the commands, subcommands and options this module accepts
    Catalog {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
