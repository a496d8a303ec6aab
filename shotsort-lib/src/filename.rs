//! Screenshot filename parsing.
//!
//! Steam names screenshots `<appid>_<timestamp>_<n>.<ext>`; the leading
//! underscore-delimited token is the app ID.

use std::path::{Path, PathBuf};

use crate::catalog::AppId;

/// Extract the app ID from a file's base name (no extension).
///
/// Returns `None` for names whose first `_`-token is not a base-10
/// integer in app ID range. A name without `_` is a single token.
/// Whitespace around the token is ignored.
pub fn parse_app_id(base_name: &str) -> Option<AppId> {
    let token = base_name.split('_').next()?;
    token.trim().parse::<AppId>().ok()
}

/// A screenshot file found during scanning, with its derived fields.
#[derive(Debug, Clone)]
pub struct ScreenshotCandidate {
    pub path: PathBuf,
    /// File stem (name without extension)
    pub base_name: String,
    /// Lower-cased extension, empty if none
    pub extension: String,
    pub app_id: Option<AppId>,
}

impl ScreenshotCandidate {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let base_name = stem_of(&path);
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        let app_id = parse_app_id(&base_name);
        Self {
            path,
            base_name,
            extension,
            app_id,
        }
    }
}

fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "tests/filename_tests.rs"]
mod tests;
