//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::Behavior;
use crate::types::Vector2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vector2);

/// Units per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vector2);

/// Steering force for the current tick. Reset to zero after integration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Acceleration(pub Vector2);

/// Collision circle radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Radius(pub f64);

/// A flock member.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Boid {
    pub behavior: Behavior,
}

/// The player's ship. Exactly one exists per session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ship {
    /// Heading in radians.
    pub angle: f64,
    /// Radians per tick.
    pub angular_velocity: f64,
    pub thrusting: bool,
}

/// A projectile fired by the ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Missile {
    /// Cleared when the missile leaves the playfield or strikes a boid.
    pub alive: bool,
}
