//! Simulation engine for flokk.
//!
//! Owns the hecs ECS world, runs systems once per frame,
//! and produces GameStateSnapshots for the host.

pub mod engine;
pub mod scoreboard;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use flokk_core as core;

use flokk_core::types::EntityId;

/// Stable id of a hecs entity, for events and snapshots.
pub(crate) fn entity_id(entity: hecs::Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}
