use std::borrow::Cow;

use crate::catalog::{AppId, Catalog};

/// Resolves an app ID to a game name.
///
/// The sort loop only talks to this trait, so a live lookup can sit behind
/// it without changing the orchestration.
pub trait AppResolver {
    /// Returns the game name, or `None` if the ID is unknown.
    fn resolve(&self, app_id: AppId) -> Option<Cow<'_, str>>;

    /// Number of names this resolver can answer without a live lookup.
    fn known_count(&self) -> usize;
}

impl AppResolver for Catalog {
    fn resolve(&self, app_id: AppId) -> Option<Cow<'_, str>> {
        self.lookup(app_id).map(Cow::Borrowed)
    }

    fn known_count(&self) -> usize {
        self.len()
    }
}
