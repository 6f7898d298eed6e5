//! Steering behaviours for flokk boids.
//!
//! Pure functions that compute the desired acceleration of a single boid
//! from a snapshot of its neighbours. No ECS dependency; operates on plain
//! data so the simulation can feed it from any storage.

pub mod aggressive;
pub mod context;
pub mod forces;
pub mod passive;

pub use flokk_core as core;

use flokk_core::enums::Behavior;
use flokk_core::types::Vector2;

pub use context::{Agent, Neighbor, NeighborKind};

/// Desired acceleration for `agent` this tick.
///
/// `neighbors` must not contain the agent itself.
pub fn compute_steering(behavior: Behavior, agent: &Agent, neighbors: &[Neighbor]) -> Vector2 {
    match behavior {
        Behavior::Passive => passive::steer(agent, neighbors),
        Behavior::Aggressive => aggressive::steer(agent, neighbors),
    }
}

#[cfg(test)]
mod tests;
