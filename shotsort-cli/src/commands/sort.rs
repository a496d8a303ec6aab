use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shotsort_lib::{
    Catalog, FileOutcome, FileStatus, RunSettings, SortOptions, SortProgress, SortSummary,
    sort_screenshots,
};
use shotsort_steam::{SteamClient, app_pairs};

use crate::cli_types::SortArgs;
use crate::commands::config::repair_settings;
use crate::error::CliError;

const RULE: &str = "--------------------------------------------------";

pub(crate) fn run_sort(
    args: SortArgs,
    directory: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    let run = RunSettings::load(directory.as_deref())?;
    let settings = repair_settings(run)?.validate()?;

    let catalog = fetch_catalog(&settings.api_key, quiet)?;
    log::info!(
        "Loaded {} games from the Steam catalog",
        catalog.len().if_supports_color(Stdout, |t| t.cyan()),
    );

    let options = SortOptions {
        dry_run: args.dry_run,
        limit: args.limit,
        ..SortOptions::new(settings.root)
    };
    if options.dry_run {
        log::info!(
            "{}",
            "Dry run: no files will be moved".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let root_dir = options.root.clone();
    let report = sort_screenshots(&catalog, &options, &|progress| match progress {
        SortProgress::Scanning { root } => {
            log::info!(
                "Scanning screenshots in: {}",
                root.display().if_supports_color(Stdout, |t| t.cyan()),
            );
        }
        SortProgress::Found { count } => {
            log::info!("Found {count} screenshots");
            log::info!("");
        }
        SortProgress::Processed { outcome, .. } => print_outcome(outcome, &root_dir),
        SortProgress::Done => {}
    })?;

    print_summary(&report.summary, options.dry_run);
    Ok(())
}

/// Fetch the app list once and build the catalog.
fn fetch_catalog(api_key: &str, quiet: bool) -> Result<Catalog, CliError> {
    let client = SteamClient::new(api_key)?;
    let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::runtime(e.to_string()))?;

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {msg}") {
            pb.set_style(style.tick_chars("/-\\|"));
        }
        pb.set_message("Fetching Steam app list...");
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    };

    let result = rt.block_on(client.fetch_app_list());
    pb.finish_and_clear();

    Ok(Catalog::from_pairs(app_pairs(result?)))
}

fn print_outcome(outcome: &FileOutcome, root: &Path) {
    let file = outcome
        .path
        .strip_prefix(root)
        .unwrap_or(&outcome.path)
        .display();
    let game = outcome.game_name.as_deref().unwrap_or("?");

    match &outcome.status {
        FileStatus::Moved => log::info!(
            "  {} {} -> {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            file,
            game.if_supports_color(Stdout, |t| t.cyan()),
        ),
        FileStatus::AlreadySorted => log::info!(
            "  {} {} {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.dimmed()),
            file,
            "(already sorted)".if_supports_color(Stdout, |t| t.dimmed()),
        ),
        FileStatus::Planned => {
            let dest = outcome
                .destination
                .as_deref()
                .map(|d| d.strip_prefix(root).unwrap_or(d).display().to_string())
                .unwrap_or_default();
            log::info!(
                "  {} {} -> {}",
                "~".if_supports_color(Stdout, |t| t.cyan()),
                file,
                dest,
            );
        }
        FileStatus::UnparsedAppId => log::info!(
            "  {} Skipping {} - could not parse App ID",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            file,
        ),
        FileStatus::UnknownAppId => log::info!(
            "  {} Skipping {} - no matching game for App ID {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            file,
            outcome.app_id.map(|id| id.to_string()).unwrap_or_default(),
        ),
        FileStatus::Failed(msg) => log::warn!(
            "  {} Could not move {} ({}): {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            file,
            game,
            msg,
        ),
    }
}

fn print_summary(summary: &SortSummary, dry_run: bool) {
    let stats = &summary.stats;
    log::info!("");
    log::info!("{RULE}");
    log::info!(
        "Sorting completed in {:.2} seconds.",
        summary.elapsed_secs()
    );
    log::info!("Total screenshots found: {}", stats.total_screenshots);
    log::info!(
        "Screenshots with unknown App ID: {}",
        stats.unknown_app_id_screenshots
    );
    if dry_run {
        log::info!("Would move: {}", stats.planned);
    } else {
        log::info!("Moved: {}", stats.moved);
    }
    log::info!("Already sorted: {}", stats.already_sorted);
    if stats.failed > 0 {
        log::warn!(
            "{}",
            format!("Failed to move: {}", stats.failed).if_supports_color(Stdout, |t| t.red()),
        );
    }
    log::info!("{RULE}");
}
