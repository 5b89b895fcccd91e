//! Experience and leveling
//!
//! The XP ledger: applies a signed delta to a character's experience and
//! rolls levels over every 1000 XP.

use crate::actors::ActorUpdate;

/// XP needed to gain one level. Fixed for every level.
pub const XP_PER_LEVEL: i64 = 1000;

/// Level assumed when the host record has none
pub const DEFAULT_LEVEL: i64 = 1;

/// XP assumed when the host record has none
pub const DEFAULT_XP: i64 = 0;

/// Apply an XP delta, returning `(new_xp, new_level)`.
///
/// Totals of 1000 or more roll over into levels. A total below zero is
/// clamped to 0 XP; the level is never lowered.
pub fn apply_delta(current_xp: i64, current_level: i64, delta: i64) -> (i64, i64) {
    let total = current_xp.saturating_add(delta);

    let (mut new_xp, new_level) = if total >= XP_PER_LEVEL {
        (
            total % XP_PER_LEVEL,
            current_level.saturating_add(total / XP_PER_LEVEL),
        )
    } else {
        (total, current_level)
    };

    // No automatic downgrade
    if new_xp < 0 {
        new_xp = 0;
    }

    (new_xp, new_level)
}

/// A character's level and XP within that level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub level: i64,
    pub xp: i64,
}

impl Progress {
    pub fn new(level: i64, xp: i64) -> Self {
        Self { level, xp }
    }

    /// Build from possibly-missing host fields
    pub fn from_fields(level: Option<i64>, xp: Option<i64>) -> Self {
        Self {
            level: level.unwrap_or(DEFAULT_LEVEL),
            xp: xp.unwrap_or(DEFAULT_XP),
        }
    }

    /// Progress after `delta`, or `None` when there is nothing to apply
    pub fn apply(self, delta: i64) -> Option<Progress> {
        if delta == 0 {
            return None;
        }
        let (xp, level) = apply_delta(self.xp, self.level, delta);
        Some(Progress { level, xp })
    }

    /// Number of levels gained going from `self` to `after`
    pub fn levels_gained(&self, after: &Progress) -> i64 {
        after.level - self.level
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL, DEFAULT_XP)
    }
}

/// Partial update carrying only the fields that differ between `before` and `after`
pub fn progress_update(before: &Progress, after: &Progress) -> ActorUpdate {
    ActorUpdate {
        level: (after.level != before.level).then_some(after.level),
        xp: (after.xp != before.xp).then_some(after.xp),
    }
}
