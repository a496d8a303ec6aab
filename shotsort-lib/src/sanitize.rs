//! Game name → folder name sanitization.

use crate::catalog::AppId;

/// Characters trimmed from the end of a sanitized name.
const TRAILING_JUNK: &[char] = &['-', ' ', '\u{2122}'];

/// Characters Windows rejects inside a path segment (besides separators and `:`).
const INVALID_SEGMENT_CHARS: &[char] = &['<', '>', '"', '|', '?', '*'];

/// Clean up a Steam display name for use as a folder name.
///
/// Order matters: colons become ` - ` before "on Steam" is removed, and the
/// trailing trim runs last so it catches separators left behind by both.
/// A space already following a colon is absorbed into the ` - `.
pub fn sanitize_game_name(raw: &str) -> String {
    let name = raw
        .replace(": ", " - ")
        .replace(':', " - ")
        .replace("on Steam", "")
        .replace('\u{00AE}', "");
    name.trim_end_matches(TRAILING_JUNK).to_string()
}

/// Build the folder name for a game, guaranteed to be one usable path segment.
///
/// Applies [`sanitize_game_name`], then replaces path separators with `-` and
/// drops characters that are invalid on Windows. Falls back to the app ID
/// when nothing usable is left.
pub fn folder_name(raw: &str, app_id: AppId) -> String {
    let sanitized = sanitize_game_name(raw);
    let cleaned: String = sanitized
        .chars()
        .filter(|c| !c.is_control() && !INVALID_SEGMENT_CHARS.contains(c))
        .map(|c| if c == '/' || c == '\\' { '-' } else { c })
        .collect();
    let cleaned = cleaned.trim_end_matches(TRAILING_JUNK);

    if cleaned.trim().is_empty() || cleaned == "." || cleaned == ".." {
        app_id.to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
#[path = "tests/sanitize_tests.rs"]
mod tests;
