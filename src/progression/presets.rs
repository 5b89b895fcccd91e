//! XP presets
//!
//! Fixed per-character award tiers offered as quick picks in the award dialog.

use serde::{Deserialize, Serialize};

/// A named quick-pick XP value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpPreset {
    /// Stable key used to select the preset
    pub key: String,
    /// Label shown in the dialog and chat card
    pub label: String,
    /// XP awarded to each character
    pub value: i64,
}

impl XpPreset {
    pub fn new(key: impl Into<String>, label: impl Into<String>, value: i64) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            value,
        }
    }
}

/// Encounter-threat tiers, per character
pub fn default_presets() -> Vec<XpPreset> {
    vec![
        XpPreset::new("trivial", "Trivial – 30 XP", 30),
        XpPreset::new("low", "Low – 60 XP", 60),
        XpPreset::new("moderate", "Moderate – 80 XP", 80),
        XpPreset::new("severe", "Severe – 120 XP", 120),
        XpPreset::new("extreme", "Extreme – 160 XP", 160),
    ]
}

/// Find a preset by key, falling back to the first one
pub fn find_preset<'a>(presets: &'a [XpPreset], key: &str) -> Option<&'a XpPreset> {
    presets
        .iter()
        .find(|p| p.key == key)
        .or_else(|| presets.first())
}
