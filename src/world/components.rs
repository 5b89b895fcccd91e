//! Actor components
//!
//! Components stored on actor entities in the [`ActorWorld`](super::ActorWorld).

use crate::actors::{ActorId, PartyLayout};

// ============================================================================
// Identity & Naming
// ============================================================================

/// Host identifier of the entity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(pub ActorId);

/// Display name
#[derive(Debug, Clone)]
pub struct Name(pub String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

// ============================================================================
// Progression
// ============================================================================

/// Level and XP as stored by the host; either may be absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Details {
    pub level: Option<i64>,
    pub xp: Option<i64>,
}

// ============================================================================
// Groups
// ============================================================================

/// Parties an actor names itself a member of
#[derive(Debug, Clone, Default)]
pub struct Affiliations(pub Vec<ActorId>);

/// Membership storage of a party actor
#[derive(Debug, Clone)]
pub struct Roster(pub PartyLayout);
