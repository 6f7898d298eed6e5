//! Running score and life counters.
//!
//! Stored on `SimulationEngine`, NOT as ECS entities.

use flokk_core::constants::{AGGRESSIVE_KILL_SCORE, SHIP_HIT_SCORE};
use flokk_core::enums::Behavior;
use flokk_core::state::HudView;

/// Counters mutated by the collision system.
///
/// `aggressive_count` always equals the number of live aggressive boids.
/// It is counted once at spawn and then only decremented alongside the
/// despawn of an aggressive boid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreState {
    pub score: f64,
    pub lives: i32,
    pub casualties: u32,
    pub aggressive_count: u32,
}

impl ScoreState {
    pub fn new(starting_lives: i32, aggressive_count: u32) -> Self {
        Self {
            score: 0.0,
            lives: starting_lives,
            casualties: 0,
            aggressive_count,
        }
    }

    /// An aggressive boid rammed the ship.
    pub fn record_ship_hit(&mut self) {
        self.aggressive_count = self.aggressive_count.saturating_sub(1);
        self.lives -= 1;
        self.score += SHIP_HIT_SCORE;
    }

    /// A missile destroyed a boid.
    pub fn record_kill(&mut self, behavior: Behavior) {
        match behavior {
            Behavior::Aggressive => {
                self.aggressive_count = self.aggressive_count.saturating_sub(1);
                self.score += AGGRESSIVE_KILL_SCORE;
            }
            Behavior::Passive => self.casualties += 1,
        }
    }

    pub fn hud(&self) -> HudView {
        HudView {
            score: self.score,
            lives: self.lives,
            aggressive_count: self.aggressive_count,
            casualties: self.casualties,
        }
    }
}
