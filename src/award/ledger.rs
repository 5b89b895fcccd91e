//! Applying an award to one character

use crate::actors::{ActorRecord, RecordStore, StoreError};
use crate::progression::{progress_update, Progress};

/// Outcome of awarding XP to a single character
#[derive(Debug, Clone, PartialEq)]
pub struct AwardEntry {
    pub name: String,
    pub xp: i64,
    pub before: Progress,
    pub after: Progress,
}

impl AwardEntry {
    pub fn levels_gained(&self) -> i64 {
        self.before.levels_gained(&self.after)
    }
}

/// Apply `delta` to `actor` and write back the changed fields.
///
/// Issues at most one store write, and none when `delta` is zero or nothing
/// would change.
pub fn apply_award(
    store: &mut dyn RecordStore,
    actor: &ActorRecord,
    delta: i64,
) -> Result<AwardEntry, StoreError> {
    let before = actor.progress();
    let Some(after) = before.apply(delta) else {
        return Ok(AwardEntry { name: actor.name.clone(), xp: delta, before, after: before });
    };

    let update = progress_update(&before, &after);
    if !update.is_empty() {
        store.update(&actor.id, &update)?;
        log::debug!(
            "{}: level {} -> {}, xp {} -> {}",
            actor.name, before.level, after.level, before.xp, after.xp
        );
    }

    Ok(AwardEntry {
        name: actor.name.clone(),
        xp: delta,
        before,
        after,
    })
}
