//! Actor records as seen through the host's record store

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::progression::Progress;

/// Host identifier of an actor
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub String);

impl ActorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for ActorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Actor type as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    /// Player character; the only kind that receives XP
    Character,
    /// Group of characters treated as one award target
    Party,
    Npc,
    Hazard,
    Vehicle,
}

impl ActorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ActorKind::Character => "character",
            ActorKind::Party => "party",
            ActorKind::Npc => "npc",
            ActorKind::Hazard => "hazard",
            ActorKind::Vehicle => "vehicle",
        }
    }
}

/// Snapshot of one actor's award-relevant fields
#[derive(Debug, Clone, PartialEq)]
pub struct ActorRecord {
    pub id: ActorId,
    pub name: String,
    pub kind: ActorKind,
    /// Level as stored; `None` when the host record has no value
    pub level: Option<i64>,
    /// XP within the current level; `None` when the host record has no value
    pub xp: Option<i64>,
    /// Parties this actor declares itself a member of
    pub parties: Vec<ActorId>,
}

impl ActorRecord {
    pub fn is_character(&self) -> bool {
        self.kind == ActorKind::Character
    }

    /// Level and XP with host defaults filled in
    pub fn progress(&self) -> Progress {
        Progress::from_fields(self.level, self.xp)
    }
}

/// How a party record stores its membership
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartyLayout {
    /// The party lists its member actors directly
    Members(Vec<ActorId>),
    /// The party lists bare ids or document references (`Actor.<id>`)
    References(Vec<String>),
    /// Members are the characters that name this party in their own record
    Affiliation,
}

/// A party-type actor
#[derive(Debug, Clone, PartialEq)]
pub struct PartyRecord {
    pub id: ActorId,
    pub name: String,
    pub layout: PartyLayout,
}

/// Merge-style partial update of a character record
///
/// Only `Some` fields are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActorUpdate {
    pub level: Option<i64>,
    pub xp: Option<i64>,
}

impl ActorUpdate {
    pub fn is_empty(&self) -> bool {
        self.level.is_none() && self.xp.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(level: Option<i64>, xp: Option<i64>) -> ActorRecord {
        ActorRecord {
            id: ActorId::new("a1"),
            name: "Valeros".to_string(),
            kind: ActorKind::Character,
            level,
            xp,
            parties: Vec::new(),
        }
    }

    #[test]
    fn test_progress_defaults_missing_fields() {
        assert_eq!(record(None, None).progress(), Progress::new(1, 0));
        assert_eq!(record(Some(5), Some(320)).progress(), Progress::new(5, 320));
    }

    #[test]
    fn test_update_is_empty() {
        assert!(ActorUpdate::default().is_empty());
        assert!(!ActorUpdate { level: None, xp: Some(10) }.is_empty());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ActorKind::Party).unwrap();
        assert_eq!(json, "\"party\"");
    }
}
