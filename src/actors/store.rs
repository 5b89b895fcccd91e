//! Record store interface
//!
//! The host application owns every actor. Award flows only see it through
//! this trait: lookups, party enumeration and one partial write per record.

use super::record::{ActorId, ActorRecord, ActorUpdate, PartyRecord};

/// Errors reported by a record store write
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("actor not found: {0}")]
    NotFound(ActorId),

    #[error("update rejected for {id}: {reason}")]
    Rejected { id: ActorId, reason: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Host-owned actor records
pub trait RecordStore {
    /// Look up any actor by id
    fn actor(&self, id: &ActorId) -> Option<ActorRecord>;

    /// All actors, in host order
    fn actors(&self) -> Vec<ActorRecord>;

    /// All party-type actors, in host order
    fn parties(&self) -> Vec<PartyRecord>;

    /// Look up a party by id
    fn party(&self, id: &ActorId) -> Option<PartyRecord> {
        self.parties().into_iter().find(|p| &p.id == id)
    }

    /// Resolve a bare id or a document reference such as `Actor.abc123`
    fn resolve(&self, reference: &str) -> Option<ActorRecord> {
        if reference.contains('.') {
            let id = parse_actor_reference(reference)?;
            self.actor(&id)
        } else {
            self.actor(&ActorId::new(reference))
        }
    }

    /// Merge `update` into the actor's record. One call is one host write.
    fn update(&mut self, id: &ActorId, update: &ActorUpdate) -> Result<(), StoreError>;
}

/// Parse a world-level actor reference (`Actor.<id>`)
///
/// References into other collections (compendium packs, embedded tokens)
/// are not world actors and yield `None`.
pub fn parse_actor_reference(reference: &str) -> Option<ActorId> {
    let mut parts = reference.split('.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Actor"), Some(id), None) if !id.is_empty() => Some(ActorId::new(id)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actor_reference() {
        assert_eq!(parse_actor_reference("Actor.abc123"), Some(ActorId::new("abc123")));
        assert_eq!(parse_actor_reference("Actor."), None);
        assert_eq!(parse_actor_reference("Item.abc123"), None);
        assert_eq!(parse_actor_reference("Compendium.pf2e.Actor.abc"), None);
    }

    #[test]
    fn test_error_display() {
        let err = StoreError::NotFound(ActorId::new("x9"));
        assert_eq!(err.to_string(), "actor not found: x9");
    }
}
