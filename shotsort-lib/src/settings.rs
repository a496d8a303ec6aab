//! Persistent settings: Steam Web API key and screenshot directory.
//!
//! Stored at `~/.config/shotsort/settings.toml`. Environment variables
//! `SHOTSORT_API_KEY` and `SHOTSORT_DIRECTORY` take priority over the file.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

pub const API_KEY_ENV: &str = "SHOTSORT_API_KEY";
pub const DIRECTORY_ENV: &str = "SHOTSORT_DIRECTORY";

/// The settings record. Both fields are empty until configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_key: String,
    pub directory: String,
}

/// A required settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    ApiKey,
    Directory,
}

impl SettingsField {
    /// Key name in the settings file.
    pub fn name(self) -> &'static str {
        match self {
            SettingsField::ApiKey => "api_key",
            SettingsField::Directory => "directory",
        }
    }
}

impl fmt::Display for SettingsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Join field names for messages: `api_key, directory`.
pub fn field_list(fields: &[SettingsField]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Settings that passed validation: both values are present.
#[derive(Debug, Clone)]
pub struct ValidSettings {
    pub api_key: String,
    pub root: PathBuf,
}

/// Settings for one run, kept in layers so overrides never reach the file.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Exactly what the settings file holds
    pub file: Settings,
    /// File values with environment and command-line overrides applied
    pub effective: Settings,
}

impl RunSettings {
    /// Layer overrides on top of `file`. `directory` (from the command line)
    /// wins over the environment.
    pub fn layer(
        file: Settings,
        lookup: impl Fn(&str) -> Option<String>,
        directory: Option<&Path>,
    ) -> Self {
        let mut effective = file.clone().with_overrides(lookup);
        if let Some(dir) = directory {
            effective.directory = dir.to_string_lossy().into_owned();
        }
        Self { file, effective }
    }

    /// Load the default settings file and layer the process environment on top.
    pub fn load(directory: Option<&Path>) -> Result<Self, SettingsError> {
        let path = settings_path().ok_or(SettingsError::NoConfigDir)?;
        let file = load_settings_from(&path)?;
        Ok(Self::layer(file, |var| std::env::var(var).ok(), directory))
    }

    /// Ask for every field still missing after overrides.
    ///
    /// Answers go into both layers, so saving `file` afterwards persists only
    /// what was typed. Returns whether anything was asked.
    pub fn fill_missing<E>(
        &mut self,
        mut ask: impl FnMut(SettingsField) -> Result<String, E>,
    ) -> Result<bool, E> {
        let missing = self.effective.missing_fields();
        for &field in &missing {
            let answer = ask(field)?;
            *self.file.field_mut(field) = answer.clone();
            *self.effective.field_mut(field) = answer;
        }
        Ok(!missing.is_empty())
    }
}

impl Settings {
    /// Apply overrides looked up by variable name. Empty values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.trim().is_empty()) {
            self.api_key = key;
        }
        if let Some(dir) = lookup(DIRECTORY_ENV).filter(|v| !v.trim().is_empty()) {
            self.directory = dir;
        }
        self
    }

    pub fn field(&self, field: SettingsField) -> &str {
        match field {
            SettingsField::ApiKey => &self.api_key,
            SettingsField::Directory => &self.directory,
        }
    }

    pub fn field_mut(&mut self, field: SettingsField) -> &mut String {
        match field {
            SettingsField::ApiKey => &mut self.api_key,
            SettingsField::Directory => &mut self.directory,
        }
    }

    /// Required fields that are still empty.
    pub fn missing_fields(&self) -> Vec<SettingsField> {
        [SettingsField::ApiKey, SettingsField::Directory]
            .into_iter()
            .filter(|&f| self.field(f).trim().is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<ValidSettings, SettingsError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(SettingsError::Missing(missing));
        }
        Ok(ValidSettings {
            api_key: self.api_key.trim().to_string(),
            root: PathBuf::from(self.directory.trim()),
        })
    }
}

/// Canonical path to the settings file.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("shotsort").join("settings.toml"))
}

/// Read settings from `path`. A missing file yields the defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e.into()),
    };
    toml::from_str(&contents).map_err(|e| SettingsError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save settings to the default path. Returns the path written.
pub fn save_settings(settings: &Settings) -> Result<PathBuf, SettingsError> {
    let path = settings_path().ok_or(SettingsError::NoConfigDir)?;
    save_settings_to(&path, settings)?;
    Ok(path)
}

/// Write settings to `path` atomically, creating parent directories.
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(settings)?;
    let tmp = path.with_extension("toml.tmp");
    fs::write(&tmp, serialized)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
