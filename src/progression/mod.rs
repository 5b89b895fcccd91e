//! Progression systems

pub mod xp;
pub mod presets;

pub use xp::{apply_delta, progress_update, Progress, XP_PER_LEVEL};
pub use presets::{default_presets, find_preset, XpPreset};
