//! World snapshot save/load
//!
//! Reads and writes the actor world as versioned JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::actors::{ActorId, ActorKind, PartyLayout};
use crate::world::{ActorSpec, ActorWorld};

/// Snapshot format version for compatibility checking
const SNAPSHOT_VERSION: u32 = 1;

/// Complete world snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub version: u32,
    pub actors: Vec<ActorSnapshot>,
}

/// One actor as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorSnapshot {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ActorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xp: Option<i64>,
    /// Parties this actor belongs to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parties: Vec<String>,
    /// Party only: member ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<String>>,
    /// Party only: member ids or `Actor.<id>` references
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_refs: Option<Vec<String>>,
}

/// Save error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Snapshot version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
    #[error("Invalid snapshot data: {0}")]
    InvalidData(String),
}

impl ActorSnapshot {
    fn into_spec(self) -> Result<ActorSpec, SaveError> {
        let roster = match (self.members, self.member_refs) {
            (Some(_), Some(_)) => {
                return Err(SaveError::InvalidData(format!(
                    "party {} has both members and member_refs",
                    self.id
                )))
            }
            (Some(ids), None) => Some(PartyLayout::Members(ids.into_iter().map(ActorId).collect())),
            (None, Some(refs)) => Some(PartyLayout::References(refs)),
            (None, None) if self.kind == ActorKind::Party => Some(PartyLayout::Affiliation),
            (None, None) => None,
        };

        if roster.is_some() && self.kind != ActorKind::Party {
            return Err(SaveError::InvalidData(format!(
                "{} actor {} lists party members",
                self.kind.name(),
                self.id
            )));
        }

        Ok(ActorSpec {
            id: ActorId(self.id),
            name: self.name,
            kind: self.kind,
            level: self.level,
            xp: self.xp,
            parties: self.parties.into_iter().map(ActorId).collect(),
            roster,
        })
    }

    fn from_spec(spec: ActorSpec) -> Self {
        let (members, member_refs) = match spec.roster {
            Some(PartyLayout::Members(ids)) => (Some(ids.into_iter().map(|id| id.0).collect()), None),
            Some(PartyLayout::References(refs)) => (None, Some(refs)),
            Some(PartyLayout::Affiliation) | None => (None, None),
        };

        Self {
            id: spec.id.0,
            name: spec.name,
            kind: spec.kind,
            level: spec.level,
            xp: spec.xp,
            parties: spec.parties.into_iter().map(|id| id.0).collect(),
            members,
            member_refs,
        }
    }
}

impl WorldSnapshot {
    /// Capture the current world
    pub fn capture(world: &ActorWorld) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            actors: world.specs().into_iter().map(ActorSnapshot::from_spec).collect(),
        }
    }

    /// Build a world from this snapshot
    pub fn into_world(self) -> Result<ActorWorld, SaveError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SaveError::VersionMismatch {
                expected: SNAPSHOT_VERSION,
                found: self.version,
            });
        }

        let mut world = ActorWorld::new();
        for actor in self.actors {
            world.spawn(actor.into_spec()?);
        }
        Ok(world)
    }
}

/// Default world file location
pub fn world_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "partyxp", "PartyXp") {
        proj_dirs.data_local_dir().join("world.json")
    } else {
        // Fallback to current directory
        PathBuf::from("./world.json")
    }
}

/// Load the actor world from a JSON snapshot
pub fn load_world(path: &Path) -> Result<ActorWorld, SaveError> {
    let data = fs::read_to_string(path).map_err(|e| SaveError::IoError(e.to_string()))?;
    let snapshot: WorldSnapshot =
        serde_json::from_str(&data).map_err(|e| SaveError::ParseError(e.to_string()))?;
    let world = snapshot.into_world()?;

    log::info!("Loaded {} actors from {}", world.len(), path.display());
    Ok(world)
}

/// Save the actor world as a JSON snapshot
pub fn save_world(world: &ActorWorld, path: &Path) -> Result<(), SaveError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| SaveError::IoError(e.to_string()))?;
    }

    let json = serde_json::to_string_pretty(&WorldSnapshot::capture(world))
        .map_err(|e| SaveError::ParseError(e.to_string()))?;
    fs::write(path, json).map_err(|e| SaveError::IoError(e.to_string()))?;

    log::info!("World saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actors::{resolve_members, RecordStore};

    const WORLD_JSON: &str = r#"{
        "version": 1,
        "actors": [
            { "id": "amiri", "name": "Amiri", "type": "character", "level": 3, "xp": 950, "parties": ["p3"] },
            { "id": "ezren", "name": "Ezren", "type": "character" },
            { "id": "goblin", "name": "Goblin", "type": "npc" },
            { "id": "p1", "name": "Heroes", "type": "party", "members": ["amiri", "goblin"] },
            { "id": "p2", "name": "Guests", "type": "party", "member_refs": ["Actor.ezren"] },
            { "id": "p3", "name": "Sworn", "type": "party" }
        ]
    }"#;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("partyxp-snapshot-{}", std::process::id()))
            .join(name)
    }

    fn parse(json: &str) -> Result<ActorWorld, SaveError> {
        serde_json::from_str::<WorldSnapshot>(json).unwrap().into_world()
    }

    #[test]
    fn test_layouts_from_json() {
        let world = parse(WORLD_JSON).unwrap();
        let layout = |id: &str| world.party(&ActorId::new(id)).unwrap().layout;

        assert_eq!(layout("p1"), PartyLayout::Members(vec![ActorId::new("amiri"), ActorId::new("goblin")]));
        assert_eq!(layout("p2"), PartyLayout::References(vec!["Actor.ezren".to_string()]));
        assert_eq!(layout("p3"), PartyLayout::Affiliation);

        let sworn = world.party(&ActorId::new("p3")).unwrap();
        let members = resolve_members(&world, &sworn);
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "Amiri");
    }

    #[test]
    fn test_missing_details_stay_missing() {
        let world = parse(WORLD_JSON).unwrap();
        let ezren = world.actor(&ActorId::new("ezren")).unwrap();
        assert_eq!((ezren.level, ezren.xp), (None, None));
    }

    #[test]
    fn test_save_and_reload_preserves_actors() {
        let mut world = parse(WORLD_JSON).unwrap();
        world
            .update(&ActorId::new("amiri"), &crate::actors::ActorUpdate { level: Some(4), xp: Some(70) })
            .unwrap();

        let path = temp_path("world.json");
        save_world(&world, &path).unwrap();
        let reloaded = load_world(&path).unwrap();

        assert_eq!(reloaded.specs(), world.specs());
        let amiri = reloaded.actor(&ActorId::new("amiri")).unwrap();
        assert_eq!((amiri.level, amiri.xp), (Some(4), Some(70)));

        // Absent fields are not written out
        let text = fs::read_to_string(&path).unwrap();
        assert!(!text.contains("\"member_refs\": null"));
    }

    #[test]
    fn test_version_mismatch() {
        let result = parse(r#"{ "version": 7, "actors": [] }"#);
        assert_eq!(result.err(), Some(SaveError::VersionMismatch { expected: 1, found: 7 }));
    }

    #[test]
    fn test_conflicting_membership_rejected() {
        let json = r#"{ "version": 1, "actors": [
            { "id": "p1", "name": "Heroes", "type": "party", "members": [], "member_refs": [] }
        ] }"#;
        assert!(matches!(parse(json), Err(SaveError::InvalidData(_))));

        let json = r#"{ "version": 1, "actors": [
            { "id": "a1", "name": "Amiri", "type": "character", "members": ["a2"] }
        ] }"#;
        assert!(matches!(parse(json), Err(SaveError::InvalidData(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_world(&temp_path("does-not-exist.json"));
        assert!(matches!(result, Err(SaveError::IoError(_))));
    }
}
