//! Core of shotsort: move Steam screenshots into per-game folders.
//!
//! The pipeline is scan → parse app ID → resolve name → sanitize → move,
//! driven by [`sort_screenshots`].

pub mod catalog;
pub mod error;
pub mod filename;
pub mod relocate;
pub mod resolver;
pub mod sanitize;
pub mod scanner;
pub mod settings;
pub mod sort;

pub use catalog::{AppId, Catalog};
pub use error::{RelocateError, SettingsError, SortError};
pub use filename::{ScreenshotCandidate, parse_app_id};
pub use relocate::{Relocation, plan_destination, relocate};
pub use resolver::AppResolver;
pub use sanitize::{folder_name, sanitize_game_name};
pub use scanner::{SCREENSHOT_EXTENSIONS, extension_set, scan_screenshots};
pub use settings::{
    RunSettings, Settings, SettingsField, ValidSettings, save_settings, settings_path,
};
pub use sort::{
    FileOutcome, FileStatus, RunStats, SortOptions, SortProgress, SortReport, SortSummary,
    sort_screenshots,
};
