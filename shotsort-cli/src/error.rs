use thiserror::Error;

use shotsort_lib::{SettingsError, SortError};
use shotsort_steam::SteamError;

/// Errors that stop a CLI command.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("Steam catalog fetch failed: {0}")]
    Steam(#[from] SteamError),

    #[error("{0}")]
    Sort(#[from] SortError),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Settings are incomplete and can't be repaired interactively
    #[error("{0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
