//! Passive flocking: separation, alignment, cohesion, ship avoidance.

use flokk_core::constants::*;
use flokk_core::types::Vector2;

use crate::context::{Agent, Neighbor};
use crate::forces::{repulsion, steer_towards, to_steering, Accumulator};

/// Sum of the four flocking rules.
///
/// - Separation (radius 40) counts every neighbour, ship included.
/// - The ship additionally adds a raw repulsion scaled by
///   `SHIP_PRESENCE_FACTOR` on top of its separation share.
/// - Cohesion (radius 10) and alignment (radius 65) only count boids.
///
/// Each rule is clamped on its own; the sum is not.
pub fn steer(agent: &Agent, neighbors: &[Neighbor]) -> Vector2 {
    let mut separation = Accumulator::default();
    let mut alignment = Accumulator::default();
    let mut cohesion = Accumulator::default();
    let mut ship_avoidance = Vector2::ZERO;

    for neighbor in neighbors {
        let distance = agent.position.distance_to(&neighbor.position);

        if distance < BOID_SEPARATION_PERCEPTION {
            let push = repulsion(agent.position, neighbor.position, distance);
            separation.push(push);
            if neighbor.is_ship() {
                ship_avoidance += push * SHIP_PRESENCE_FACTOR;
            }
        }

        if neighbor.is_boid() {
            if distance < BOID_COHESION_PERCEPTION {
                cohesion.push(neighbor.position);
            }
            if distance < BOID_PERCEPTION {
                alignment.push(neighbor.velocity);
            }
        }
    }

    let cohesion = match cohesion.mean() {
        Some(centroid) => steer_towards(centroid - agent.position, agent.velocity),
        None => Vector2::ZERO,
    };

    to_steering(&separation, agent.velocity)
        + to_steering(&alignment, agent.velocity)
        + cohesion
        + ship_avoidance
}
