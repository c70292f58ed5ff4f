//! Application settings stored as `settings.json` in the data directory

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::codec::{Codec, CodecLimits};
use crate::saved_lists::storage::Result;

/// User-adjustable settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Origin prepended to share links; empty produces relative links
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub limits: CodecLimits,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            limits: CodecLimits::default(),
        }
    }
}

impl Settings {
    /// Codec configured with these limits
    pub fn codec(&self) -> Codec {
        Codec::new(self.limits)
    }
}

/// Get the settings file path
pub fn get_settings_path(data_dir: &Path) -> PathBuf {
    data_dir.join("settings.json")
}

/// Load settings from file, falling back to defaults when absent
pub fn load_settings(data_dir: &Path) -> Result<Settings> {
    let settings_path = get_settings_path(data_dir);

    if !settings_path.exists() {
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(&settings_path)?;
    let settings: Settings = serde_json::from_str(&content)?;
    Ok(settings)
}

/// Save settings to file
pub fn save_settings(data_dir: &Path, settings: &Settings) -> Result<()> {
    fs::create_dir_all(data_dir)?;
    let settings_path = get_settings_path(data_dir);
    let content = serde_json::to_string_pretty(settings)?;
    fs::write(&settings_path, content)?;
    Ok(())
}
