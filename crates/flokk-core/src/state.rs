//! Game state snapshot: the complete visible state handed to the
//! rendering/HUD layer after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{Behavior, GamePhase};
use crate::events::GameEvent;
use crate::types::{EntityId, SimTime, Vector2};

/// Complete game state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub hud: HudView,
    pub ship: ShipView,
    /// Sorted by entity id.
    pub boids: Vec<BoidView>,
    pub missiles: Vec<MissileView>,
    /// Events produced during this tick.
    pub events: Vec<GameEvent>,
}

/// Counters shown by the text overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    pub score: f64,
    pub lives: i32,
    pub aggressive_count: u32,
    pub casualties: u32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Vector2,
    pub velocity: Vector2,
    /// Heading in radians.
    pub angle: f64,
    pub thrusting: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoidView {
    pub id: EntityId,
    pub position: Vector2,
    pub velocity: Vector2,
    pub behavior: Behavior,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MissileView {
    pub id: EntityId,
    pub position: Vector2,
}
