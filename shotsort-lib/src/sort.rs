//! The batch sort: scan, parse, resolve, relocate, count.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::catalog::AppId;
use crate::error::SortError;
use crate::filename::ScreenshotCandidate;
use crate::relocate::{Relocation, plan_destination, relocate};
use crate::resolver::AppResolver;
use crate::scanner::{SCREENSHOT_EXTENSIONS, extension_set, scan_screenshots};

/// Options controlling a sort run.
#[derive(Debug, Clone)]
pub struct SortOptions {
    /// Screenshot root; game folders are created directly below it
    pub root: PathBuf,
    /// Lower-cased extensions to consider
    pub extensions: HashSet<String>,
    /// Report destinations without moving anything
    pub dry_run: bool,
    /// Maximum number of screenshots to process
    pub limit: Option<usize>,
}

impl SortOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: extension_set(SCREENSHOT_EXTENSIONS),
            dry_run: false,
            limit: None,
        }
    }
}

/// Per-file result of a sort run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Moved into its game folder
    Moved,
    /// Already in its game folder
    AlreadySorted,
    /// Dry run: would have been moved
    Planned,
    /// Filename has no leading app ID
    UnparsedAppId,
    /// App ID not in the catalog
    UnknownAppId,
    /// Resolved, but the move failed
    Failed(String),
}

/// What the sort did with one screenshot.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub app_id: Option<AppId>,
    pub game_name: Option<String>,
    pub destination: Option<PathBuf>,
    pub status: FileStatus,
}

impl FileOutcome {
    /// True if the file is now (or already was) in its game folder.
    pub fn relocated(&self) -> bool {
        matches!(self.status, FileStatus::Moved | FileStatus::AlreadySorted)
    }

    /// True for files counted as unknown (unparsed or unresolved ID).
    pub fn is_unknown(&self) -> bool {
        matches!(
            self.status,
            FileStatus::UnparsedAppId | FileStatus::UnknownAppId
        )
    }
}

/// Counters for a run. Only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub total_screenshots: usize,
    pub unknown_app_id_screenshots: usize,
    pub moved: usize,
    pub already_sorted: usize,
    pub planned: usize,
    pub failed: usize,
}

impl RunStats {
    fn record(&mut self, status: &FileStatus) {
        self.total_screenshots += 1;
        match status {
            FileStatus::Moved => self.moved += 1,
            FileStatus::AlreadySorted => self.already_sorted += 1,
            FileStatus::Planned => self.planned += 1,
            FileStatus::UnparsedAppId | FileStatus::UnknownAppId => {
                self.unknown_app_id_screenshots += 1
            }
            FileStatus::Failed(_) => self.failed += 1,
        }
    }
}

/// Final summary of a run.
#[derive(Debug, Clone, Copy)]
pub struct SortSummary {
    pub stats: RunStats,
    pub elapsed: Duration,
}

impl SortSummary {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Everything a sort run produced.
#[derive(Debug, Clone)]
pub struct SortReport {
    pub outcomes: Vec<FileOutcome>,
    pub summary: SortSummary,
}

/// Progress events for callbacks.
#[derive(Debug, Clone)]
pub enum SortProgress<'a> {
    /// Walking the root directory
    Scanning { root: &'a Path },
    /// Scan finished
    Found { count: usize },
    /// One screenshot handled
    Processed {
        index: usize,
        total: usize,
        outcome: &'a FileOutcome,
    },
    /// All screenshots handled
    Done,
}

/// Sort every screenshot under `options.root` into per-game folders.
///
/// Fails only if the preconditions are not met (missing root, empty
/// resolver) or the root can't be scanned. Per-file failures are recorded
/// in the returned report and never stop the batch.
pub fn sort_screenshots(
    resolver: &dyn AppResolver,
    options: &SortOptions,
    progress: &dyn Fn(SortProgress<'_>),
) -> Result<SortReport, SortError> {
    let root = options.root.as_path();
    if !root.exists() {
        return Err(SortError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(SortError::NotADirectory(root.to_path_buf()));
    }
    if resolver.known_count() == 0 {
        return Err(SortError::EmptyCatalog);
    }

    let started = Instant::now();
    let mut stats = RunStats::default();

    progress(SortProgress::Scanning { root });
    let mut files = scan_screenshots(root, &options.extensions).map_err(|e| SortError::Scan {
        path: root.to_path_buf(),
        source: e,
    })?;
    if let Some(limit) = options.limit {
        files.truncate(limit);
    }
    let total = files.len();
    progress(SortProgress::Found { count: total });

    let mut outcomes = Vec::with_capacity(total);
    for (index, path) in files.into_iter().enumerate() {
        let outcome = process_file(resolver, options, path);
        stats.record(&outcome.status);
        progress(SortProgress::Processed {
            index,
            total,
            outcome: &outcome,
        });
        outcomes.push(outcome);
    }

    progress(SortProgress::Done);

    Ok(SortReport {
        outcomes,
        summary: SortSummary {
            stats,
            elapsed: started.elapsed(),
        },
    })
}

/// Parse → resolve → relocate for a single file.
fn process_file(resolver: &dyn AppResolver, options: &SortOptions, path: PathBuf) -> FileOutcome {
    let candidate = ScreenshotCandidate::new(path);
    let mut outcome = FileOutcome {
        path: candidate.path,
        app_id: candidate.app_id,
        game_name: None,
        destination: None,
        status: FileStatus::UnparsedAppId,
    };

    let Some(app_id) = outcome.app_id else {
        return outcome;
    };
    let Some(game_name) = resolver.resolve(app_id) else {
        outcome.status = FileStatus::UnknownAppId;
        return outcome;
    };
    let game_name = game_name.into_owned();

    if options.dry_run {
        match plan_destination(&outcome.path, &game_name, app_id, &options.root) {
            Ok(dest) => {
                outcome.status = if dest == outcome.path {
                    FileStatus::AlreadySorted
                } else {
                    FileStatus::Planned
                };
                outcome.destination = Some(dest);
            }
            Err(e) => outcome.status = FileStatus::Failed(e.to_string()),
        }
    } else {
        match relocate(&outcome.path, &game_name, app_id, &options.root) {
            Ok(Relocation::Moved(dest)) => {
                outcome.status = FileStatus::Moved;
                outcome.destination = Some(dest);
            }
            Ok(Relocation::AlreadyInPlace(dest)) => {
                outcome.status = FileStatus::AlreadySorted;
                outcome.destination = Some(dest);
            }
            Err(e) => {
                log::debug!("Relocation failed for {}: {e}", outcome.path.display());
                outcome.status = FileStatus::Failed(e.to_string());
            }
        }
    }

    outcome.game_name = Some(game_name);
    outcome
}

#[cfg(test)]
#[path = "tests/sort_tests.rs"]
mod tests;
