//! Actor world
//!
//! Reference host: actors live as hecs entities, indexed by host id and kept
//! in insertion order.

use std::collections::HashMap;

use hecs::{Entity, EntityBuilder, World};

use super::components::{Affiliations, Details, Identity, Name, Roster};
use crate::actors::{
    ActorId, ActorKind, ActorRecord, ActorUpdate, PartyLayout, PartyRecord, RecordStore, StoreError,
};

/// Everything needed to spawn one actor
#[derive(Debug, Clone, PartialEq)]
pub struct ActorSpec {
    pub id: ActorId,
    pub name: String,
    pub kind: ActorKind,
    pub level: Option<i64>,
    pub xp: Option<i64>,
    pub parties: Vec<ActorId>,
    /// Only meaningful for parties
    pub roster: Option<PartyLayout>,
}

impl ActorSpec {
    pub fn character(id: &str, name: impl Into<String>, level: Option<i64>, xp: Option<i64>) -> Self {
        Self {
            id: ActorId::new(id),
            name: name.into(),
            kind: ActorKind::Character,
            level,
            xp,
            parties: Vec::new(),
            roster: None,
        }
    }

    pub fn party(id: &str, name: impl Into<String>, layout: PartyLayout) -> Self {
        Self {
            id: ActorId::new(id),
            name: name.into(),
            kind: ActorKind::Party,
            level: None,
            xp: None,
            parties: Vec::new(),
            roster: Some(layout),
        }
    }

    pub fn in_parties(mut self, parties: &[&str]) -> Self {
        self.parties = parties.iter().map(|p| ActorId::new(*p)).collect();
        self
    }
}

/// hecs-backed actor store
pub struct ActorWorld {
    world: World,
    index: HashMap<ActorId, Entity>,
    order: Vec<Entity>,
    writes: u64,
}

impl ActorWorld {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            index: HashMap::new(),
            order: Vec::new(),
            writes: 0,
        }
    }

    /// Spawn an actor. An actor with the same id is replaced in place.
    pub fn spawn(&mut self, spec: ActorSpec) -> Entity {
        let mut builder = EntityBuilder::new();
        builder
            .add(Identity(spec.id.clone()))
            .add(Name::new(spec.name))
            .add(spec.kind)
            .add(Details { level: spec.level, xp: spec.xp })
            .add(Affiliations(spec.parties));

        match spec.roster {
            Some(layout) if spec.kind == ActorKind::Party => {
                builder.add(Roster(layout));
            }
            Some(_) => log::warn!("Ignoring roster on non-party actor {}", spec.id),
            None => {}
        }
        let entity = self.world.spawn(builder.build());

        match self.index.insert(spec.id.clone(), entity) {
            Some(previous) => {
                log::warn!("Duplicate actor id {}, replacing", spec.id);
                if self.world.despawn(previous).is_err() {
                    log::error!("Stale entity for actor {}", spec.id);
                }
                if let Some(slot) = self.order.iter_mut().find(|e| **e == previous) {
                    *slot = entity;
                }
            }
            None => self.order.push(entity),
        }

        entity
    }

    /// Number of actors
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Writes applied since the world was created
    pub fn write_count(&self) -> u64 {
        self.writes
    }

    /// Spawn specs for every actor, in order
    pub fn specs(&self) -> Vec<ActorSpec> {
        self.order.iter().filter_map(|&e| self.spec_of(e)).collect()
    }

    fn spec_of(&self, entity: Entity) -> Option<ActorSpec> {
        let id = self.world.get::<&Identity>(entity).ok()?.0.clone();
        let name = self.world.get::<&Name>(entity).ok()?.0.clone();
        let kind = *self.world.get::<&ActorKind>(entity).ok()?;
        let details = *self.world.get::<&Details>(entity).ok()?;
        let parties = self
            .world
            .get::<&Affiliations>(entity)
            .map(|a| a.0.clone())
            .unwrap_or_default();
        let roster = self.world.get::<&Roster>(entity).ok().map(|r| r.0.clone());

        Some(ActorSpec {
            id,
            name,
            kind,
            level: details.level,
            xp: details.xp,
            parties,
            roster,
        })
    }

    fn record_of(&self, entity: Entity) -> Option<ActorRecord> {
        let spec = self.spec_of(entity)?;
        Some(ActorRecord {
            id: spec.id,
            name: spec.name,
            kind: spec.kind,
            level: spec.level,
            xp: spec.xp,
            parties: spec.parties,
        })
    }

    fn party_of(&self, entity: Entity) -> Option<PartyRecord> {
        if *self.world.get::<&ActorKind>(entity).ok()? != ActorKind::Party {
            return None;
        }
        let id = self.world.get::<&Identity>(entity).ok()?.0.clone();
        let name = self.world.get::<&Name>(entity).ok()?.0.clone();
        // A party without a stored list is found through its members
        let layout = self
            .world
            .get::<&Roster>(entity)
            .map(|r| r.0.clone())
            .unwrap_or(PartyLayout::Affiliation);
        Some(PartyRecord { id, name, layout })
    }
}

impl Default for ActorWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for ActorWorld {
    fn actor(&self, id: &ActorId) -> Option<ActorRecord> {
        self.index.get(id).and_then(|&e| self.record_of(e))
    }

    fn actors(&self) -> Vec<ActorRecord> {
        self.order.iter().filter_map(|&e| self.record_of(e)).collect()
    }

    fn parties(&self) -> Vec<PartyRecord> {
        self.order.iter().filter_map(|&e| self.party_of(e)).collect()
    }

    fn party(&self, id: &ActorId) -> Option<PartyRecord> {
        self.index.get(id).and_then(|&e| self.party_of(e))
    }

    fn update(&mut self, id: &ActorId, update: &ActorUpdate) -> Result<(), StoreError> {
        let entity = *self.index.get(id).ok_or_else(|| StoreError::NotFound(id.clone()))?;

        let kind = *self
            .world
            .get::<&ActorKind>(entity)
            .map_err(|_| StoreError::NotFound(id.clone()))?;
        if kind != ActorKind::Character {
            return Err(StoreError::Rejected {
                id: id.clone(),
                reason: format!("{} actors have no experience", kind.name()),
            });
        }

        let mut details = self
            .world
            .get::<&mut Details>(entity)
            .map_err(|_| StoreError::NotFound(id.clone()))?;
        if let Some(level) = update.level {
            details.level = Some(level);
        }
        if let Some(xp) = update.xp {
            details.xp = Some(xp);
        }
        drop(details);

        self.writes += 1;
        Ok(())
    }
}
