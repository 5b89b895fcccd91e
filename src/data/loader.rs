//! RON config loader
//!
//! Loads award settings from a RON file, with fallback to built-in defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::progression::{default_presets, XpPreset};

/// Award settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwardConfig {
    /// Quick-pick tiers offered in the award dialog
    pub presets: Vec<XpPreset>,
    /// Speaker alias for chat cards
    pub speaker: String,
    /// Append the level-up reminder to chat cards
    pub level_up_note: bool,
}

impl Default for AwardConfig {
    fn default() -> Self {
        Self {
            presets: default_presets(),
            speaker: "Game Master".to_string(),
            level_up_note: true,
        }
    }
}

impl AwardConfig {
    /// Load from `path`, or from the platform config directory when `None`.
    ///
    /// A missing or broken file yields the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            log::warn!("{}. Using defaults.", e);
            Self::default()
        })
    }

    /// Load from a RON file
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let config: AwardConfig = ron::from_str(&content)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
        Ok(config.validated())
    }

    /// Replace an empty preset table with the defaults
    fn validated(mut self) -> Self {
        if self.presets.is_empty() {
            log::warn!("Config has no XP presets, using the default tiers");
            self.presets = default_presets();
        }
        self
    }
}

/// Default config file location
pub fn config_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "partyxp", "PartyXp") {
        proj_dirs.config_dir().join("config.ron")
    } else {
        PathBuf::from("./config.ron")
    }
}

/// Write the default config as pretty RON
pub fn export_default_config(path: &Path) -> Result<(), String> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create {}: {}", dir.display(), e))?;
    }

    let ron = ron::ser::to_string_pretty(&AwardConfig::default(), ron::ser::PrettyConfig::default())
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    fs::write(path, ron).map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;

    log::info!("Default config written to {}", path.display());
    Ok(())
}
