//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Steering strategy of a boid. Fixed at spawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Behavior {
    /// Ordinary flock member: separates, aligns, coheres, and shies away
    /// from the ship.
    #[default]
    Passive,
    /// Attacker: homes in on the ship, only keeping clear of other boids.
    Aggressive,
}

impl Behavior {
    pub fn is_aggressive(&self) -> bool {
        matches!(self, Behavior::Aggressive)
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Victory,
    GameOver,
}

impl GamePhase {
    /// Victory and GameOver wait for a click to restart.
    pub fn is_finished(&self) -> bool {
        matches!(self, GamePhase::Victory | GamePhase::GameOver)
    }
}
