//! Save/load system
//!
//! Handles the actor world snapshot and the chat transcript file.

pub mod snapshot;
pub mod transcript;

pub use snapshot::{
    ActorSnapshot, SaveError, WorldSnapshot,
    load_world, save_world, world_path,
};

pub use transcript::{TranscriptEntry, TranscriptFile};
