use std::path::PathBuf;

use thiserror::Error;

use crate::settings::{SettingsField, field_list};

/// Errors that prevent a sort run from starting.
///
/// Per-file problems never surface here; they are recorded on the
/// individual [`FileOutcome`](crate::sort::FileOutcome) instead.
#[derive(Debug, Error)]
pub enum SortError {
    /// The configured screenshot root does not exist
    #[error("Screenshot directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// The configured screenshot root is a file, not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The app catalog has no entries, so nothing could be resolved
    #[error("App catalog is empty; refusing to sort with no game names")]
    EmptyCatalog,

    /// The root directory could not be walked
    #[error("Failed to scan {}: {source}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while moving a single screenshot.
#[derive(Debug, Error)]
pub enum RelocateError {
    /// The screenshot disappeared between scanning and moving
    #[error("Source file missing: {}", .0.display())]
    SourceMissing(PathBuf),

    /// The source path has no file name component
    #[error("Source path has no file name: {}", .0.display())]
    NoFileName(PathBuf),

    /// The game folder could not be created
    #[error("Failed to create {}: {source}", .dir.display())]
    CreateDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rename (or cross-device copy) failed
    #[error("Failed to move {} -> {}: {source}", .from.display(), .to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from loading, saving, or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// One or more required fields are empty
    #[error("Missing required settings: {}", field_list(.0))]
    Missing(Vec<SettingsField>),

    #[error("Could not determine config directory")]
    NoConfigDir,
}
