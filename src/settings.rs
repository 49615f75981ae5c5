use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "grid-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Player name shown when none has been configured.
pub const DEFAULT_PLAYER_NAME: &str = "Player 1";

/// Failure loading or saving the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Per-user session settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub player_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_name: DEFAULT_PLAYER_NAME.to_string(),
        }
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads settings from disk.
///
/// Returns defaults when the file does not yet exist (first run). Returns
/// `Err` when the file exists but cannot be read or parsed, so the caller can
/// surface a warning before entering raw terminal mode.
pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from_path(&settings_path())
}

/// Saves settings to disk, creating parent directories when needed.
pub fn save_settings(settings: &Settings) -> Result<(), SettingsError> {
    save_settings_to_path(&settings_path(), settings)
}

fn load_settings_from_path(path: &Path) -> Result<Settings, SettingsError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e.into()),
    };

    Ok(serde_json::from_str(&raw)?)
}

fn save_settings_to_path(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}
