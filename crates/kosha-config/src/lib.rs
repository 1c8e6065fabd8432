use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use kosha_types::{Credentials, Theme};

pub const SETTINGS_FILE: &str = "settings.json";

/// Locally persisted settings.
///
/// Keys mirror what the app stores: backend endpoint (`sb_url`), API key
/// (`sb_key`) and the theme preference. Mode is deliberately not persisted.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub sb_url: String,
    pub sb_key: String,
    pub theme: Theme,
}

impl Settings {
    /// Load settings from `dir`, then apply environment overrides.
    ///
    /// A missing or unreadable file falls back to defaults; the
    /// configuration prompt downstream handles the empty-credentials case.
    pub fn load(dir: &Path) -> Self {
        let mut settings = match fs::read_to_string(dir.join(SETTINGS_FILE)) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("settings file is corrupt, using defaults: {e}");
                    Settings::default()
                }
            },
            Err(_) => Settings::default(),
        };

        if let Ok(url) = env::var("KOSHA_URL") {
            settings.sb_url = url;
        }
        if let Ok(key) = env::var("KOSHA_KEY") {
            settings.sb_key = key;
        }
        if let Ok(theme) = env::var("KOSHA_THEME") {
            match theme.as_str() {
                "light" => settings.theme = Theme::Light,
                "dark" => settings.theme = Theme::Dark,
                other => tracing::warn!("ignoring unknown KOSHA_THEME value: {other}"),
            }
        }

        settings
    }

    /// Persist settings as pretty JSON under `dir`, creating it if needed.
    pub fn save(&self, dir: &Path) -> anyhow::Result<()> {
        fs::create_dir_all(dir)?;
        fs::write(dir.join(SETTINGS_FILE), serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Both url and key must be non-empty for the remote clients to exist.
    /// No format validation; the remote service is the authority on bad input.
    pub fn credentials(&self) -> Option<Credentials> {
        if self.sb_url.is_empty() || self.sb_key.is_empty() {
            return None;
        }
        Some(Credentials {
            endpoint_url: self.sb_url.clone(),
            api_key: self.sb_key.clone(),
        })
    }
}

/// Resolve the config directory: explicit env override, then the platform
/// convention, then the working directory as a last resort.
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = env::var("KOSHA_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("kosha");
    }
    if let Ok(home) = env::var("HOME") {
        return PathBuf::from(home).join(".config").join("kosha");
    }
    PathBuf::from(".")
}
