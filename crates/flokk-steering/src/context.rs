//! Inputs to the steering functions.

use flokk_core::types::Vector2;

/// The boid being steered.
#[derive(Debug, Clone, Copy)]
pub struct Agent {
    pub position: Vector2,
    pub velocity: Vector2,
}

/// What kind of entity a neighbour is. Cohesion and alignment only count
/// boids; the ship gets special treatment in both behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborKind {
    Ship,
    Boid,
    Missile,
}

/// Value snapshot of another entity, taken before anyone moved this tick.
#[derive(Debug, Clone, Copy)]
pub struct Neighbor {
    pub kind: NeighborKind,
    pub position: Vector2,
    pub velocity: Vector2,
}

impl Neighbor {
    pub fn is_ship(&self) -> bool {
        self.kind == NeighborKind::Ship
    }

    pub fn is_boid(&self) -> bool {
        self.kind == NeighborKind::Boid
    }
}
