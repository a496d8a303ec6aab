//! Recursive screenshot discovery under the root directory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Extensions Steam writes screenshots with.
pub const SCREENSHOT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Build the lower-cased extension set used for matching.
pub fn extension_set(extensions: &[&str]) -> HashSet<String> {
    extensions
        .iter()
        .map(|e| e.trim_start_matches('.').to_lowercase())
        .collect()
}

/// Check if a path has an extension in the allowed set (case-insensitive).
pub fn has_matching_extension(path: &Path, extensions: &HashSet<String>) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.contains(&e.to_lowercase()))
        .unwrap_or(false)
}

/// Regular files, plus symlinks that point at one.
///
/// Links are not followed while walking, so directory links can't loop.
fn is_file_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// Collect every file under `root` with a matching extension, sorted.
///
/// The whole list is gathered before anything is moved. Entries that can't
/// be read below the root are logged and skipped; failing to read the root
/// itself is an error.
pub fn scan_screenshots(
    root: &Path,
    extensions: &HashSet<String>,
) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };
        if is_file_entry(&entry) && has_matching_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
