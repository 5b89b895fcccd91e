//! Actors: host records, the store interface and party membership

pub mod record;
pub mod store;
pub mod party;

pub use record::{ActorId, ActorKind, ActorRecord, ActorUpdate, PartyLayout, PartyRecord};
pub use store::{parse_actor_reference, RecordStore, StoreError};
pub use party::{resolve_members, roster_for, PartyRoster};
