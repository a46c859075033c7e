//! Application settings persistence for Noty.
//!
//! Stores user preferences (where the notes store lives, colour theme) in a
//! JSON file at an OS-appropriate location.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn toggled(self) -> Self {
        match self {
            ThemeChoice::Dark => ThemeChoice::Light,
            ThemeChoice::Light => ThemeChoice::Dark,
        }
    }
}

/// Persisted application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// SQLite file holding the pages.
    pub storage_path: String,
    pub theme: ThemeChoice,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path().to_string_lossy().to_string(),
            theme: ThemeChoice::default(),
        }
    }
}

/// Returns the path to the settings JSON file.
///
/// - macOS / Linux: `~/.config/noty/settings.json`
/// - Windows: `%APPDATA%/Noty/settings.json`
pub fn settings_file_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("Noty").join("settings.json")
    }
    #[cfg(not(target_os = "windows"))]
    {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("noty").join("settings.json")
    }
}

/// Returns the default store location: `<data dir>/noty/noty.db`.
pub fn default_storage_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".local")
                .join("share")
        })
        .join("noty")
        .join("noty.db")
}

/// Loads settings from `path`; returns defaults if the file is missing or corrupt.
pub fn load_settings_from(path: &Path) -> AppSettings {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("ignoring corrupt settings file {}: {e}", path.display());
            AppSettings::default()
        }),
        Err(_) => AppSettings::default(),
    }
}

/// Saves settings to `path`, creating parent directories as needed.
pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create settings directory: {e}"))?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Failed to write settings: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("settings.json"));
        assert_eq!(settings, AppSettings::default());
        assert!(settings.storage_path.ends_with("noty.db"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            storage_path: "/tmp/elsewhere.db".to_string(),
            theme: ThemeChoice::Light,
        };

        save_settings_to(&path, &settings).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"storagePath\""));
        assert!(raw.contains("\"light\""));

        assert_eq!(load_settings_from(&path), settings);
    }

    #[test]
    fn test_theme_toggled() {
        assert_eq!(ThemeChoice::Dark.toggled(), ThemeChoice::Light);
        assert_eq!(ThemeChoice::Light.toggled(), ThemeChoice::Dark);
    }

    #[test]
    fn test_partial_and_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        fs::write(&path, r#"{"theme":"light"}"#).unwrap();
        let partial = load_settings_from(&path);
        assert_eq!(partial.theme, ThemeChoice::Light);
        assert_eq!(partial.storage_path, AppSettings::default().storage_path);

        fs::write(&path, "{{{").unwrap();
        assert_eq!(load_settings_from(&path), AppSettings::default());
    }
}
