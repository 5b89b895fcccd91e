//! PartyXp - experience awards for tabletop parties
//!
//! Award XP to every member of a party from a dropdown dialog, or to the
//! characters of an encounter once it ends. Levels roll over every 1000 XP.

pub mod progression;
pub mod actors;
pub mod award;
pub mod world;
pub mod data;
pub mod save;
pub mod ui;

// Re-export commonly used types
pub use progression::{apply_delta, Progress, XP_PER_LEVEL};
pub use actors::{ActorId, RecordStore};
pub use award::{award_party, on_encounter_ended, AwardHost, AwardOutcome};
pub use world::ActorWorld;
