//! Configuration data
//!
//! Award settings loaded from external RON files, so presets can be tuned
//! per table without rebuilding.

pub mod loader;

pub use loader::{config_path, export_default_config, AwardConfig};
