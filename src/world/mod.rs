//! Actor world
//!
//! In-process stand-in for the host application's actor collection.

pub mod actors;
pub mod components;

pub use actors::{ActorSpec, ActorWorld};
