//! Domain events emitted by the simulation for observers.

use serde::{Deserialize, Serialize};

use crate::enums::Behavior;
use crate::types::EntityId;

/// Something notable that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A missile destroyed a boid.
    BoidDestroyed {
        boid: EntityId,
        missile: EntityId,
        behavior: Behavior,
        /// Score after the kill was counted.
        score: f64,
    },
    /// An aggressive boid rammed the ship and was destroyed.
    ShipHit {
        boid: EntityId,
        /// Lives remaining after the hit.
        lives: i32,
    },
    /// Every aggressive boid is gone.
    GameWon { score: f64, casualties: u32 },
    /// The ship ran out of lives.
    GameLost { score: f64 },
}
