//! Shared force accumulation helpers.

use flokk_core::constants::{BOID_MAX_FORCE, BOID_MAX_SPEED};
use flokk_core::types::Vector2;

/// Running sum of neighbour contributions for one rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accumulator {
    pub sum: Vector2,
    pub count: u32,
}

impl Accumulator {
    pub fn push(&mut self, contribution: Vector2) {
        self.sum += contribution;
        self.count += 1;
    }

    /// Mean of the contributions, or `None` if nothing was pushed.
    pub fn mean(&self) -> Option<Vector2> {
        self.sum.divide(self.count as f64).ok()
    }
}

/// Push on `own` away from `other`: `(own - other) / distance`.
///
/// Coincident points have no direction and contribute zero.
pub fn repulsion(own: Vector2, other: Vector2, distance: f64) -> Vector2 {
    (own - other).divide(distance).unwrap_or_default()
}

/// Turn a desired heading into a bounded steering force:
/// full-speed desired velocity minus current velocity, capped at
/// `BOID_MAX_FORCE`.
pub fn steer_towards(desired: Vector2, velocity: Vector2) -> Vector2 {
    let desired = desired.with_magnitude(BOID_MAX_SPEED);
    (desired - velocity).limited(BOID_MAX_FORCE)
}

/// Averaged steering for an accumulated rule. Zero when no neighbour
/// contributed.
pub fn to_steering(acc: &Accumulator, velocity: Vector2) -> Vector2 {
    match acc.mean() {
        Some(mean) => steer_towards(mean, velocity),
        None => Vector2::ZERO,
    }
}
