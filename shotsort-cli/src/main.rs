//! shotsort CLI
//!
//! Moves Steam screenshots into folders named after their games.

mod cli_types;
mod commands;
mod error;
mod logger;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{Cli, Commands, ConfigAction, SortArgs};
use commands::config::{run_config_path, run_config_setup, run_config_show};
use commands::sort::run_sort;

fn main() {
    let cli = Cli::parse();
    logger::init(cli.quiet, cli.verbose);

    let result = match cli.command {
        None => run_sort(SortArgs::default(), cli.directory, cli.quiet),
        Some(Commands::Sort { args }) => run_sort(args, cli.directory, cli.quiet),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => run_config_show(),
            ConfigAction::Setup => run_config_setup(),
            ConfigAction::Path => run_config_path(),
        },
    };

    if let Err(e) = result {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}
