//! XP awards
//!
//! The two award flows (party dialog and encounter end) and the services
//! they are given by the host.

pub mod host;
pub mod ledger;
pub mod report;
pub mod manual;
pub mod encounter;

pub use host::{
    AwardChoice, AwardPrompt, AwardRequest, ChatMessage, EncounterRequest, NoticeLevel,
    Notifier, PartyOption, Session, Transcript,
};
pub use ledger::{apply_award, AwardEntry};
pub use report::{AwardReport, AwardSource};
pub use manual::award_party;
pub use encounter::{on_encounter_ended, EncounterAward, EncounterEnded};

use crate::actors::{ActorId, ActorRecord, RecordStore, StoreError};

/// Services an award flow runs against
pub struct AwardHost<'a> {
    pub store: &'a mut dyn RecordStore,
    pub prompt: &'a mut dyn AwardPrompt,
    pub notifier: &'a mut dyn Notifier,
    pub transcript: &'a mut dyn Transcript,
}

/// Failures that abort an award part-way
#[derive(Debug, thiserror::Error)]
pub enum AwardError {
    /// A character write failed; earlier characters keep their award
    #[error("award halted: {0}")]
    Store(#[from] StoreError),

    #[error("prompt failed: {0}")]
    Prompt(String),
}

/// Why an award stopped without writing anything
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NoParties,
    PartyNotFound(ActorId),
    NoMembers(String),
    NoRecipients,
    InvalidXp,
    ZeroXp,
    /// Automatic awards only run for the game master; no notice is shown
    NotGameMaster,
}

/// How an award flow ended
#[derive(Debug, Clone, PartialEq)]
pub enum AwardOutcome {
    Awarded(AwardReport),
    Skipped(SkipReason),
    /// The user dismissed the prompt
    Cancelled,
}

impl AwardOutcome {
    pub fn is_awarded(&self) -> bool {
        matches!(self, AwardOutcome::Awarded(_))
    }
}

/// Apply `xp` to each character in turn. The first failed write stops the batch.
fn apply_to_all(
    store: &mut dyn RecordStore,
    characters: &[ActorRecord],
    xp: i64,
) -> Result<Vec<AwardEntry>, StoreError> {
    let mut entries = Vec::with_capacity(characters.len());
    for actor in characters {
        entries.push(apply_award(store, actor, xp)?);
    }
    Ok(entries)
}

/// Post the chat card; a failure here does not undo the award
fn post_report(transcript: &mut dyn Transcript, message: &ChatMessage) {
    if let Err(e) = transcript.post(message) {
        log::warn!("Failed to post award to transcript: {:#}", e);
    }
}
