//! Party membership resolution
//!
//! Each host schema variant gets one adapter implementing [`PartyRoster`].
//! The adapter is picked from the party's declared layout; there is no
//! trial-and-error between variants.

use std::collections::HashSet;

use super::record::{ActorId, ActorRecord, PartyLayout, PartyRecord};
use super::store::RecordStore;

/// Capability: list the actors a party refers to
pub trait PartyRoster {
    /// Candidate member records, unfiltered and possibly repeated
    fn member_records(&self, party: &PartyRecord, store: &dyn RecordStore) -> Vec<ActorRecord>;
}

/// Party lists member ids directly
pub struct DirectRoster<'a>(pub &'a [ActorId]);

impl PartyRoster for DirectRoster<'_> {
    fn member_records(&self, _party: &PartyRecord, store: &dyn RecordStore) -> Vec<ActorRecord> {
        self.0.iter().filter_map(|id| store.actor(id)).collect()
    }
}

/// Party lists ids or `Actor.<id>` references
pub struct ReferenceRoster<'a>(pub &'a [String]);

impl PartyRoster for ReferenceRoster<'_> {
    fn member_records(&self, party: &PartyRecord, store: &dyn RecordStore) -> Vec<ActorRecord> {
        self.0
            .iter()
            .filter_map(|reference| {
                let found = store.resolve(reference);
                if found.is_none() {
                    log::debug!("Party {}: unresolved member reference {}", party.id, reference);
                }
                found
            })
            .collect()
    }
}

/// Characters name the party in their own record
pub struct AffiliationRoster;

impl PartyRoster for AffiliationRoster {
    fn member_records(&self, party: &PartyRecord, store: &dyn RecordStore) -> Vec<ActorRecord> {
        store
            .actors()
            .into_iter()
            .filter(|a| a.parties.contains(&party.id))
            .collect()
    }
}

/// Roster adapter for a party's layout
pub fn roster_for(layout: &PartyLayout) -> Box<dyn PartyRoster + '_> {
    match layout {
        PartyLayout::Members(ids) => Box::new(DirectRoster(ids)),
        PartyLayout::References(refs) => Box::new(ReferenceRoster(refs)),
        PartyLayout::Affiliation => Box::new(AffiliationRoster),
    }
}

/// Player characters belonging to `party`, in roster order without duplicates
pub fn resolve_members(store: &dyn RecordStore, party: &PartyRecord) -> Vec<ActorRecord> {
    let mut seen = HashSet::new();
    roster_for(&party.layout)
        .member_records(party, store)
        .into_iter()
        .filter(|a| a.is_character())
        .filter(|a| seen.insert(a.id.clone()))
        .collect()
}
