//! Response models for `ISteamApps/GetAppList/v2`.

use serde::Deserialize;

use shotsort_lib::AppId;

#[derive(Debug, Deserialize)]
pub struct AppListResponse {
    pub applist: AppList,
}

#[derive(Debug, Deserialize)]
pub struct AppList {
    #[serde(default)]
    pub apps: Vec<AppEntry>,
}

/// One app in the listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppEntry {
    pub appid: AppId,
    #[serde(default)]
    pub name: String,
}

/// Turn listing entries into catalog pairs, dropping unnamed apps.
///
/// Order is preserved so duplicate IDs keep last-wins semantics downstream.
pub fn app_pairs(entries: Vec<AppEntry>) -> impl Iterator<Item = (AppId, String)> {
    entries
        .into_iter()
        .filter(|e| !e.name.trim().is_empty())
        .map(|e| (e.appid, e.name))
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
