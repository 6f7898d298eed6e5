//! Aggressive behaviour: chase the ship, keep clear of other boids.

use flokk_core::constants::*;
use flokk_core::types::Vector2;

use crate::context::{Agent, Neighbor};
use crate::forces::{repulsion, to_steering, Accumulator};
use crate::passive;

/// Attack force towards the ship plus short-range separation.
///
/// Without a ship among the neighbours the boid flocks passively for
/// this tick.
pub fn steer(agent: &Agent, neighbors: &[Neighbor]) -> Vector2 {
    let Some(ship) = neighbors.iter().find(|n| n.is_ship()) else {
        return passive::steer(agent, neighbors);
    };

    let attack = (ship.position - agent.position)
        .with_magnitude(BOID_MAX_SPEED * AGGRESSIVE_SPEED_FACTOR)
        .limited(BOID_MAX_FORCE * AGGRESSIVE_FORCE_FACTOR);

    let radius = BOID_SEPARATION_PERCEPTION / 2.0;
    let mut separation = Accumulator::default();
    for neighbor in neighbors.iter().filter(|n| !n.is_ship()) {
        let distance = agent.position.distance_to(&neighbor.position);
        if distance < radius {
            separation.push(repulsion(agent.position, neighbor.position, distance));
        }
    }

    attack + to_steering(&separation, agent.velocity)
}
