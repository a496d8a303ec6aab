//! In-memory Steam app catalog: app ID → display name.
//!
//! Built once per run from the app listing and read-only afterwards.

use std::collections::HashMap;

/// Steam application identifier.
pub type AppId = u32;

/// Immutable mapping from app ID to game name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    names: HashMap<AppId, String>,
}

impl Catalog {
    /// Build a catalog from `(id, name)` pairs.
    ///
    /// When an ID appears more than once, the last pair wins.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (AppId, S)>,
        S: Into<String>,
    {
        let mut names = HashMap::new();
        for (id, name) in pairs {
            names.insert(id, name.into());
        }
        Self { names }
    }

    /// Look up the display name for an app ID.
    pub fn lookup(&self, id: AppId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(AppId, String)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (AppId, String)>>(iter: T) -> Self {
        Self::from_pairs(iter)
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
