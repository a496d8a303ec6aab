//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shotsort")]
#[command(about = "Sort Steam screenshots into per-game folders", long_about = None)]
pub(crate) struct Cli {
    /// Screenshot directory (overrides the saved setting for this run)
    #[arg(short, long, global = true)]
    pub directory: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `sort` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Arguments for a sort run.
#[derive(Args, Clone, Default)]
pub(crate) struct SortArgs {
    /// Show where screenshots would go without moving them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Maximum number of screenshots to process
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Move screenshots into folders named after their games
    Sort {
        #[command(flatten)]
        args: SortArgs,
    },

    /// Manage saved settings (API key, screenshot directory)
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and where they come from
    Show,

    /// Interactively set the API key and screenshot directory
    Setup,

    /// Print the settings file path
    Path,
}
